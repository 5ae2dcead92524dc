//! Analysis service abstraction
//!
//! Hosts run the controller's `AnalyzeRequest` action through this trait so
//! the event loop can be exercised against [`crate::test_utils::MockAnalyzeApi`]
//! as well as the real HTTP client.

use cronos_core::prelude::*;
use cronos_core::{AnalysisRequest, AnalysisResult, ReportId};
use url::Url;

use crate::endpoints::ReportFormat;

/// Operations the analysis service exposes to the client
#[trait_variant::make(AnalyzeApi: Send)]
pub trait LocalAnalyzeApi {
    /// Submit one analysis and wait for the structured report
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;

    /// URL at which a stored report can be downloaded in the given format
    fn report_url(&self, format: ReportFormat, id: &ReportId) -> Result<Url>;
}
