//! Headless mode - NDJSON event output for scripting and E2E tests
//!
//! Runs one analysis through the same controller the TUI uses and writes
//! structured events to stdout, one JSON object per line. Each event has an
//! `event` field naming its type and a millisecond `timestamp`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"mode_selected","mode":"COMPLIANCE","timestamp":1704700001000}
//! {"event":"analysis_started","mode":"COMPLIANCE","seq":1,"timestamp":1704700001002}
//! {"event":"analysis_completed","status":"FAIL","risk_score":"7","report_id":"abc","timestamp":1704700003000}
//! {"event":"download_available","format":"json","url":"http://127.0.0.1:8000/report/json/abc","timestamp":1704700003001}
//! ```

pub mod runner;

use chrono::Utc;
use cronos_core::Mode;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The form for `mode` was opened
    ModeSelected { mode: Mode, timestamp: i64 },

    /// The analyze call was sent
    AnalysisStarted { mode: Mode, seq: u64, timestamp: i64 },

    /// The service returned a report
    AnalysisCompleted {
        status: String,
        risk_score: String,
        report_id: Option<String>,
        timestamp: i64,
    },

    /// The analyze call produced no report
    AnalysisFailed {
        message: String,
        status: Option<u16>,
        timestamp: i64,
    },

    /// A stored report can be fetched from `url`
    DownloadAvailable {
        format: String,
        url: String,
        timestamp: i64,
    },

    /// Error outside the analyze call (bad input, I/O)
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one NDJSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Event name as serialized in the `event` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::ModeSelected { .. } => "mode_selected",
            Self::AnalysisStarted { .. } => "analysis_started",
            Self::AnalysisCompleted { .. } => "analysis_completed",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::DownloadAvailable { .. } => "download_available",
            Self::Error { .. } => "error",
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn mode_selected(mode: Mode) -> Self {
        Self::ModeSelected {
            mode,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_started(mode: Mode, seq: u64) -> Self {
        Self::AnalysisStarted {
            mode,
            seq,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(status: &str, risk_score: &str, report_id: Option<&str>) -> Self {
        Self::AnalysisCompleted {
            status: status.to_string(),
            risk_score: risk_score.to_string(),
            report_id: report_id.map(str::to_string),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(message: String, status: Option<u16>) -> Self {
        Self::AnalysisFailed {
            message,
            status,
            timestamp: Self::now(),
        }
    }

    pub fn download_available(format: &str, url: &str) -> Self {
        Self::DownloadAvailable {
            format: format.to_string(),
            url: url.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_mode_selected_serialization() {
        let value = to_value(&HeadlessEvent::mode_selected(Mode::Change));

        assert_eq!(value["event"], "mode_selected");
        assert_eq!(value["mode"], "CHANGE");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_analysis_completed_serialization() {
        let value = to_value(&HeadlessEvent::analysis_completed("FAIL", "7", Some("abc")));

        assert_eq!(value["event"], "analysis_completed");
        assert_eq!(value["status"], "FAIL");
        assert_eq!(value["risk_score"], "7");
        assert_eq!(value["report_id"], "abc");
    }

    #[test]
    fn test_analysis_failed_serialization() {
        let value = to_value(&HeadlessEvent::analysis_failed(
            "Server returned 400: Invalid mode".to_string(),
            Some(400),
        ));

        assert_eq!(value["event"], "analysis_failed");
        assert_eq!(value["status"], 400);
        assert_eq!(value["message"], "Server returned 400: Invalid mode");
    }

    #[test]
    fn test_event_name_matches_tag() {
        let events = [
            HeadlessEvent::mode_selected(Mode::Compliance),
            HeadlessEvent::analysis_started(Mode::Compliance, 1),
            HeadlessEvent::download_available("pdf", "http://x/report/pdf/1"),
            HeadlessEvent::error("boom".to_string(), true),
        ];
        for event in &events {
            assert_eq!(to_value(event)["event"], event.name());
        }
    }
}
