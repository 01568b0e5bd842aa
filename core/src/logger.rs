use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Structured JSON-lines logger. Every line carries a run id (`rid`) so
/// one batch's lines can be correlated in aggregated logs. Lines go to
/// stderr by default; stdout is reserved for the per-case counts. A
/// caller-supplied sink can capture lines instead.
#[derive(Clone, Debug)]
pub struct Logger {
    rid: u64,
    verbose: bool,
    sink: Option<Arc<Mutex<Vec<u8>>>>,
}

impl Logger {
    #[must_use]
    pub fn new(rid: u64, verbose: bool) -> Self {
        Self { rid, verbose, sink: None }
    }

    /// Routes lines into `sink` instead of stderr.
    #[must_use]
    pub fn with_sink(rid: u64, verbose: bool, sink: Arc<Mutex<Vec<u8>>>) -> Self {
        Self { rid, verbose, sink: Some(sink) }
    }

    pub fn generate_rid() -> u64 {
        (Utc::now().timestamp_millis() as u64) ^ u64::from(std::process::id())
    }

    /// Emitted only when verbose is set.
    pub fn info(&self, subsystem: &str, action: &str, message: &str) {
        if self.verbose {
            self.emit("info", subsystem, action, json!(message));
        }
    }

    /// Structured variant of `info`. The payload is serialized only when
    /// the line is actually emitted, so quiet runs pay nothing for it.
    pub fn info_data(&self, subsystem: &str, action: &str, data: impl Serialize) {
        if self.verbose {
            let value = serde_json::to_value(data).unwrap_or(serde_json::Value::Null);
            self.emit("info", subsystem, action, value);
        }
    }

    /// Emitted regardless of verbosity.
    pub fn error(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("error", subsystem, action, json!(message));
    }

    fn emit(&self, level: &str, subsystem: &str, action: &str, msg: serde_json::Value) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "level": level,
            "rid": self.rid,
            "subsystem": subsystem,
            "action": action,
            "msg": msg,
        });
        match &self.sink {
            Some(sink) => {
                if let Ok(mut buf) = sink.lock() {
                    let _ = writeln!(buf, "{entry}");
                }
            }
            None => eprintln!("{entry}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(verbose: bool) -> (Logger, Arc<Mutex<Vec<u8>>>) {
        let sink = Arc::new(Mutex::new(Vec::new()));
        (Logger::with_sink(1, verbose, Arc::clone(&sink)), sink)
    }

    fn drain(sink: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(sink.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn info_is_dropped_when_not_verbose() {
        let (logger, sink) = capture(false);
        logger.info("batch", "case_done", "quiet");
        logger.info_data("batch", "case_done", json!({"n": 3}));
        assert_eq!(drain(&sink), "");
    }

    #[test]
    fn error_is_emitted_regardless_of_verbosity() {
        let (logger, sink) = capture(false);
        logger.error("batch", "run_failed", "boom");
        let lines = drain(&sink);
        assert!(lines.contains("\"level\":\"error\""));
        assert!(lines.contains("\"action\":\"run_failed\""));
    }

    #[test]
    fn structured_payloads_land_in_msg() {
        let (logger, sink) = capture(true);
        logger.info_data("batch", "case_done", json!({"n": 3, "matches": 1}));
        let lines = drain(&sink);
        assert!(lines.contains("\"level\":\"info\""));
        assert!(lines.contains("\"n\":3"));
        assert!(lines.contains("\"matches\":1"));
    }
}
