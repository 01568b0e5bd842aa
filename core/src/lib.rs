#![deny(warnings)]

pub mod case;
pub mod config;
pub mod error;
pub mod logger;
pub mod reader;
pub mod scan;

use std::io::{BufRead, Write};

use case::Bounds;
use config::Config;
use error::{Result, WincountError};
use logger::Logger;
use reader::CaseReader;
use serde::Serialize;

/// Totals for one completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub cases: usize,
    pub total_matches: usize,
}

/// Structured payload for per-case log lines.
#[derive(Serialize)]
struct CaseStats<'a> {
    case: usize,
    of: usize,
    bounds: &'a Bounds,
    n: usize,
    matches: usize,
}

pub struct BatchRunner {
    config: Config,
    logger: Logger,
}

impl BatchRunner {
    pub fn new(config: Config) -> Self {
        let logger = Logger::new(Logger::generate_rid(), config.verbose);
        Self { config, logger }
    }

    /// Same runner, but logging through a caller-supplied logger.
    pub fn with_logger(config: Config, logger: Logger) -> Self {
        Self { config, logger }
    }

    /// Runs a whole batch: reads the header, then for each case reads the
    /// array, counts its in-range windows, and writes one count line.
    /// Failures are logged at error level before propagating.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<BatchSummary> {
        match self.run_batch(input, output) {
            Ok(summary) => Ok(summary),
            Err(e) => {
                self.logger.error("batch", "run_failed", &e.to_string());
                Err(e)
            }
        }
    }

    fn run_batch<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<BatchSummary> {
        self.config.validate()?;

        let mut reader = CaseReader::new(input, self.config.max_case_len);
        let cases = reader.read_header()?;
        if cases > self.config.max_cases {
            return Err(WincountError::InvalidCase {
                reason: format!("test count {cases} exceeds cap {}", self.config.max_cases),
            });
        }

        let mut total_matches = 0usize;
        for idx in 0..cases {
            let case = reader.read_case()?;
            let matches = scan::count_windows(&case.values, case.bounds);
            total_matches += matches;
            writeln!(output, "{matches}").map_err(|e| WincountError::Io {
                source: e,
                context: "writing count".to_string(),
            })?;
            self.logger.info_data(
                "batch",
                "case_done",
                CaseStats {
                    case: idx + 1,
                    of: cases,
                    bounds: &case.bounds,
                    n: case.values.len(),
                    matches,
                },
            );
        }

        let summary = BatchSummary { cases, total_matches };
        self.logger.info_data("batch", "run_done", summary);
        Ok(summary)
    }
}
