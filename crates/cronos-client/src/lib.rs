//! cronos-client - Transport to the CRONOS analysis service
//!
//! This crate owns everything that crosses the network boundary:
//! - `endpoints`: base URL validation and the three endpoint URLs
//! - `api`: the [`AnalyzeApi`] trait the controller's hosts depend on
//! - `http`: the `reqwest`-backed implementation (native and wasm32)
//!
//! The analysis engine itself, report storage and PDF generation live on the
//! server and are out of scope here.

pub mod api;
pub mod endpoints;
pub mod http;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{AnalyzeApi, LocalAnalyzeApi};
pub use endpoints::{ApiBase, ReportFormat, DEFAULT_BASE_URL};
pub use http::HttpAnalyzeClient;
