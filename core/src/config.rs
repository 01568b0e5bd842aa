use crate::error::{Result, WincountError};
use std::path::PathBuf;

pub const DEFAULT_MAX_CASES: usize = 100_000;
pub const DEFAULT_MAX_CASE_LEN: usize = 10_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Batch source; `None` means stdin.
    pub input: Option<PathBuf>,
    pub verbose: bool,
    /// Upper limit on the header's test count.
    pub max_cases: usize,
    /// Upper limit on a single case's array length.
    pub max_case_len: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            input: None,
            verbose: false,
            max_cases: DEFAULT_MAX_CASES,
            max_case_len: DEFAULT_MAX_CASE_LEN,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_cases == 0 {
            return Err(WincountError::InvalidConfig {
                field: "max_cases".to_string(),
                value: self.max_cases.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_case_len == 0 {
            return Err(WincountError::InvalidConfig {
                field: "max_case_len".to_string(),
                value: self.max_case_len.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
