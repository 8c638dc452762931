//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, no buffering

use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Client-caused failures
    Warn = 1,
    /// Server-side failures
    Error = 2,
    /// Unrecoverable, process exits
    Fatal = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// ERROR and above go to stderr
    fn writes_to_stderr(&self) -> bool {
        *self >= Severity::Error
    }
}

/// A structured logger that writes JSON lines
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity.writes_to_stderr() {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::format_line(severity, event, fields);

        // A failed log write must never fail the request that produced it
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":");
        line.push_str(&quote(event));
        line.push_str(",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        for (key, value) in sorted_fields {
            line.push(',');
            line.push_str(&quote(key));
            line.push(':');
            line.push_str(&quote(value));
        }

        line.push_str("}\n");
        line
    }
}

fn quote(s: &str) -> String {
    // Serializing a &str cannot fail
    serde_json::to_string(s).unwrap_or_default()
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error.writes_to_stderr());
        assert!(!Severity::Warn.writes_to_stderr());
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(Severity::Info, "BOOK_CREATED", &[("id", "4")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "BOOK_CREATED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["id"], "4");
    }

    #[test]
    fn test_fields_sorted_after_event() {
        let a = capture_log(Severity::Warn, "T", &[("zebra", "1"), ("apple", "2")]);
        let b = capture_log(Severity::Warn, "T", &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(a, b);

        let event = a.find("\"event\"").unwrap();
        let severity = a.find("\"severity\"").unwrap();
        let apple = a.find("apple").unwrap();
        let zebra = a.find("zebra").unwrap();
        assert!(event < severity && severity < apple && apple < zebra);
    }

    #[test]
    fn test_escapes_special_chars() {
        let output = capture_log(Severity::Info, "T", &[("path", "/books/\"x\"\n")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["path"], "/books/\"x\"\n");
        assert_eq!(output.matches('\n').count(), 1);
        assert!(output.ends_with('\n'));
    }
}
