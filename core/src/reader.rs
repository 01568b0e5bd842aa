use std::io::BufRead;
use std::str::FromStr;

use crate::case::{Bounds, TestCase};
use crate::error::{Result, WincountError};

/// Whitespace-token reader for the batch format: `T`, then per case
/// `N L R` followed by N integers. Line breaks carry no meaning; tokens
/// may be packed or split across lines however the producer likes.
pub struct CaseReader<R> {
    input: R,
    tokens: Vec<String>,
    next: usize,
    position: usize,
    max_case_len: usize,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(input: R, max_case_len: usize) -> Self {
        Self { input, tokens: Vec::new(), next: 0, position: 0, max_case_len }
    }

    /// Reads the batch header: the number of test cases.
    pub fn read_header(&mut self) -> Result<usize> {
        self.read_int("test count")
    }

    /// Reads one `N L R` case plus its N elements.
    pub fn read_case(&mut self) -> Result<TestCase> {
        let n: usize = self.read_int("array length")?;
        if n > self.max_case_len {
            return Err(WincountError::InvalidCase {
                reason: format!("array length {n} exceeds cap {}", self.max_case_len),
            });
        }
        let lo: i64 = self.read_int("lower bound")?;
        let hi: i64 = self.read_int("upper bound")?;
        let bounds = Bounds::new(lo, hi)?;

        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.read_int("array element")?);
        }
        Ok(TestCase { bounds, values })
    }

    fn read_int<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let tok = self.next_token()?.ok_or_else(|| WincountError::UnexpectedEof {
            expected: expected.to_string(),
        })?;
        tok.parse()
            .map_err(|_| WincountError::BadToken { token: tok, position: self.position })
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.next >= self.tokens.len() {
            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(|e| WincountError::Io {
                source: e,
                context: "reading input".to_string(),
            })?;
            if read == 0 {
                return Ok(None);
            }
            self.tokens = line.split_whitespace().map(str::to_string).collect();
            self.next = 0;
        }
        let tok = self.tokens[self.next].clone();
        self.next += 1;
        self.position += 1;
        Ok(Some(tok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_CASE_LEN;
    use std::io::Cursor;

    fn reader(text: &str) -> CaseReader<Cursor<&str>> {
        CaseReader::new(Cursor::new(text), DEFAULT_MAX_CASE_LEN)
    }

    #[test]
    fn parses_a_case_regardless_of_line_breaks() {
        let mut r = reader("1\n3 2\n 5\n10 20\n 30\n");
        assert_eq!(r.read_header().unwrap(), 1);
        let case = r.read_case().unwrap();
        assert_eq!(case.bounds, Bounds::new(2, 5).unwrap());
        assert_eq!(case.values, vec![10, 20, 30]);
    }

    #[test]
    fn reports_bad_token_with_its_position() {
        let mut r = reader("1\n2 1 5\n7 oops\n");
        r.read_header().unwrap();
        match r.read_case() {
            Err(WincountError::BadToken { token, position }) => {
                assert_eq!(token, "oops");
                assert_eq!(position, 6);
            }
            other => panic!("expected BadToken, got {other:?}"),
        }
    }

    #[test]
    fn negative_array_length_is_a_bad_token() {
        let mut r = reader("1\n-3 1 5\n");
        r.read_header().unwrap();
        assert!(matches!(r.read_case(), Err(WincountError::BadToken { .. })));
    }

    #[test]
    fn truncated_stream_reports_eof() {
        let mut r = reader("1\n3 1 5\n10 20\n");
        r.read_header().unwrap();
        match r.read_case() {
            Err(WincountError::UnexpectedEof { expected }) => {
                assert_eq!(expected, "array element");
            }
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let mut r = reader("1\n2 6 3\n1 2\n");
        r.read_header().unwrap();
        assert!(matches!(r.read_case(), Err(WincountError::InvalidCase { .. })));
    }

    #[test]
    fn length_over_the_cap_is_rejected() {
        let mut r = CaseReader::new(Cursor::new("2 1 5\n1 2\n"), 1);
        assert!(matches!(r.read_case(), Err(WincountError::InvalidCase { .. })));
    }
}
