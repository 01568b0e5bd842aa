use crate::error::{Result, WincountError};
use serde::Serialize;

/// Inclusive target range for a window sum. Serializes so per-case log
/// lines can carry it as a structured payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub lo: i64,
    pub hi: i64,
}

impl Bounds {
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo > hi {
            return Err(WincountError::InvalidCase {
                reason: format!("bounds reversed: {lo} > {hi}"),
            });
        }
        Ok(Self { lo, hi })
    }

    pub fn contains(&self, sum: i128) -> bool {
        i128::from(self.lo) <= sum && sum <= i128::from(self.hi)
    }
}

/// One batch entry: an array and the range its window sums must hit.
/// Read once, consumed by a single scan, then dropped.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub bounds: Bounds,
    pub values: Vec<i64>,
}
