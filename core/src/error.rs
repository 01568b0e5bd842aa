use thiserror::Error;

#[derive(Debug, Error)]
pub enum WincountError {
    #[error("I/O error: {source} ({context})")]
    Io { source: std::io::Error, context: String },
    #[error("bad token {token:?} at token {position}: expected an integer")]
    BadToken { token: String, position: usize },
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("invalid test case: {reason}")]
    InvalidCase { reason: String },
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig { field: String, value: String, reason: String },
}
pub type Result<T> = std::result::Result<T, WincountError>;

impl From<std::io::Error> for WincountError {
    fn from(source: std::io::Error) -> Self {
        WincountError::Io { source, context: "<unknown>".to_string() }
    }
}
