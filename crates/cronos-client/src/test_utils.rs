//! Test utilities for the analysis transport
//!
//! Provides a scripted [`MockAnalyzeApi`] and helpers for building sample
//! responses without a running server.

use std::collections::VecDeque;
use std::sync::Mutex;

use cronos_core::prelude::*;
use cronos_core::{AnalysisRequest, AnalysisResult, Mode, ReportId, RiskScore, Status};
use url::Url;

use crate::endpoints::{ApiBase, ReportFormat};

/// Creates a sample response with the fields every report carries.
///
/// # Arguments
/// * `mode` - Mode echoed back by the service
/// * `status` - Verdict (`"PASS"`, `"FAIL"`, ...)
/// * `report_id` - Server-issued identifier
pub fn sample_result(mode: Mode, status: &str, report_id: &str) -> AnalysisResult {
    AnalysisResult {
        status: Status::from(status.to_string()),
        risk_score: Some(RiskScore::Integer(if status == "PASS" { 0 } else { 60 })),
        technical_explanation: Some("Expected behavior not guaranteed".to_string()),
        human_explanation: match mode {
            Mode::Change => Some("Inputs equal to the boundary now behave differently".to_string()),
            Mode::Compliance => None,
        },
        ai_solution: match mode {
            Mode::Compliance => Some("Guard the empty-input case".to_string()),
            Mode::Change => None,
        },
        report_id: ReportId::new(report_id),
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        ai_provider: "OpenRouter".to_string(),
        mode: Some(mode),
        analyzer_findings: Vec::new(),
        semantic_signals: serde_json::Map::new(),
    }
}

/// Scripted analysis service
///
/// Responses are returned in the order they were queued; when the queue is
/// empty every call fails with an HTTP error. All submitted requests are
/// recorded for later inspection.
#[derive(Debug, Default)]
pub struct MockAnalyzeApi {
    base: ApiBase,
    responses: Mutex<VecDeque<Result<AnalysisResult>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl MockAnalyzeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.push(Ok(result));
        self
    }

    /// Queue a failed response
    pub fn with_error(self, error: Error) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: Result<AnalysisResult>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl crate::api::AnalyzeApi for MockAnalyzeApi {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let next = self.responses.lock().ok().and_then(|mut q| q.pop_front());
        next.unwrap_or_else(|| Err(Error::http("no scripted response")))
    }

    fn report_url(&self, format: ReportFormat, id: &ReportId) -> Result<Url> {
        self.base.report_url(format, id)
    }
}
