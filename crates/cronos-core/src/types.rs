//! Wire types exchanged with the analysis service
//!
//! These mirror the JSON documents of `POST /analyze`. Responses are parsed
//! leniently: unknown fields are ignored and optional explanation fields may
//! be missing, since the service fills them from AI providers that can fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Mode
// ─────────────────────────────────────────────────────────────────────────────

/// Analysis workflow selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Contract-conformance check of a piece of source code
    Compliance,
    /// Before/after behavior-change check of a condition
    Change,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Compliance, Mode::Change];

    /// Wire token (`"COMPLIANCE"` / `"CHANGE"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Compliance => "COMPLIANCE",
            Mode::Change => "CHANGE",
        }
    }

    /// Whether this mode collects old/new condition text
    pub fn has_conditions(&self) -> bool {
        matches!(self, Mode::Change)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COMPLIANCE" => Ok(Mode::Compliance),
            "CHANGE" => Ok(Mode::Change),
            other => Err(format!(
                "unknown mode '{other}' (expected COMPLIANCE or CHANGE)"
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// Constraint flags narrowing how the analyzer treats behavior changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub no_behavior_change: bool,
    #[serde(default)]
    pub allow_boundary_change: bool,
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub mode: Mode,
    pub source_code: String,
    pub expected_output: String,
    pub constraints: Constraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_condition: Option<String>,
}

impl AnalysisRequest {
    pub fn new(
        mode: Mode,
        source_code: impl Into<String>,
        expected_output: impl Into<String>,
        constraints: Constraints,
    ) -> Self {
        Self {
            mode,
            source_code: source_code.into(),
            expected_output: expected_output.into(),
            constraints,
            old_condition: None,
            new_condition: None,
        }
    }

    /// Attach old/new condition text. Ignored unless the mode is CHANGE.
    pub fn with_conditions(
        mut self,
        old_condition: impl Into<String>,
        new_condition: impl Into<String>,
    ) -> Self {
        if self.mode.has_conditions() {
            self.old_condition = Some(old_condition.into());
            self.new_condition = Some(new_condition.into());
        }
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

/// Verdict of an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Pass,
    Fail,
    /// Any other verdict the service reports (e.g. `ERROR`), kept verbatim
    Other(String),
}

impl Status {
    pub fn class(&self) -> StatusClass {
        match self {
            Status::Pass => StatusClass::Pass,
            Status::Fail => StatusClass::Fail,
            Status::Other(_) => StatusClass::Error,
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PASS" => Status::Pass,
            "FAIL" => Status::Fail,
            _ => Status::Other(value),
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => f.write_str("PASS"),
            Status::Fail => f.write_str("FAIL"),
            Status::Other(s) => f.write_str(s),
        }
    }
}

/// Visual class of a report container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Pass,
    Fail,
    Error,
}

impl StatusClass {
    /// CSS class applied to the report container
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Pass => "result-pass",
            StatusClass::Fail => "result-fail",
            StatusClass::Error => "result-error",
        }
    }
}

/// Risk score as reported by the service, displayed verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskScore {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskScore::Integer(n) => write!(f, "{n}"),
            RiskScore::Float(n) => write!(f, "{n}"),
            RiskScore::Text(s) => f.write_str(s),
        }
    }
}

/// Server-issued report identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Returns `None` for empty or whitespace-only identifiers
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One analyzer's contribution to the verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub risk: i64,
    #[serde(default)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Response of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: Status,
    #[serde(default)]
    pub risk_score: Option<RiskScore>,
    #[serde(default)]
    pub technical_explanation: Option<String>,
    #[serde(default)]
    pub human_explanation: Option<String>,
    #[serde(default)]
    pub ai_solution: Option<String>,
    #[serde(default)]
    pub report_id: Option<ReportId>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub ai_provider: String,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub analyzer_findings: Vec<Finding>,
    #[serde(default)]
    pub semantic_signals: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisResult {
    /// The report id, if the service issued a usable one
    pub fn usable_report_id(&self) -> Option<&ReportId> {
        self.report_id
            .as_ref()
            .filter(|id| !id.as_str().trim().is_empty())
    }

    /// The AI-suggested solution, if present and non-empty
    pub fn solution(&self) -> Option<&str> {
        self.ai_solution
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}
