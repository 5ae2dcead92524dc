//! Message types for the controller (TEA pattern)

use cronos_client::ReportFormat;
use cronos_core::{AnalysisResult, Error, Mode};

use crate::form::{ConstraintKind, EditorInput, Field};
use crate::input_key::InputKey;

/// Why an analysis produced no report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    /// HTTP status, when the service answered with a non-success code
    pub status: Option<u16>,
    pub message: String,
}

impl AnalysisFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<&Error> for AnalysisFailure {
    fn from(err: &Error) -> Self {
        match err {
            Error::ServerStatus { status, message } => Self {
                status: Some(*status),
                message: format!("Server returned {status}: {message}"),
            },
            other => Self::new(other.to_string()),
        }
    }
}

impl From<Error> for AnalysisFailure {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

/// All possible messages the controller handles
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal host
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit the terminal host (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Choose a workflow and show its form
    SelectMode(Mode),

    /// Clear everything and return to the mode cards
    BackToModeSelection,

    /// Move the highlight on the mode-selection screen
    HighlightMode(Mode),

    // ─────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────
    /// Replace the whole contents of a field (browser `input` event)
    FieldInput { field: Field, value: String },

    /// Apply one editing keystroke to the focused field
    EditorInput(EditorInput),

    /// Flip a constraint checkbox
    ToggleConstraint(ConstraintKind),

    /// Set a constraint checkbox (browser `change` event)
    SetConstraint { kind: ConstraintKind, checked: bool },

    /// Move keyboard focus to the next visible control
    FocusNext,

    /// Move keyboard focus to the previous visible control
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    /// Submit the form
    Analyze,

    /// The analyze call for submission `seq` finished
    AnalysisCompleted {
        seq: u64,
        outcome: Result<AnalysisResult, AnalysisFailure>,
    },

    // ─────────────────────────────────────────────────────────
    // Report
    // ─────────────────────────────────────────────────────────
    /// Collapse or expand the report body
    ToggleCollapse,

    /// Scroll the report body by `delta` lines (terminal host)
    ScrollReport(i32),

    /// Download the last report
    Download(ReportFormat),

    /// Close the alert dialog
    DismissAlert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_from_server_status() {
        let failure = AnalysisFailure::from(Error::server_status(400, "Invalid mode"));
        assert_eq!(failure.status, Some(400));
        assert!(failure.message.contains("400"));
        assert!(failure.message.contains("Invalid mode"));
    }

    #[test]
    fn test_failure_from_transport_error() {
        let failure = AnalysisFailure::from(&Error::http("connection refused"));
        assert_eq!(failure.status, None);
        assert!(failure.message.contains("connection refused"));
    }
}
