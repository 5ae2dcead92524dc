//! # cronos-core - Core Domain Types
//!
//! Foundation crate for the CRONOS analysis console. Provides the wire types
//! exchanged with the analysis service, error handling, markup escaping and
//! logging setup.
//!
//! This crate has **zero internal dependencies** and compiles for both native
//! targets and `wasm32` (logging setup is native-only).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Mode`] - Analysis workflow (COMPLIANCE or CHANGE)
//! - [`Constraints`] - The two behavior-change constraint flags
//! - [`AnalysisRequest`] - Body of `POST /analyze`
//! - [`AnalysisResult`] - Response of `POST /analyze`
//! - [`Status`], [`StatusClass`], [`RiskScore`], [`Finding`], [`ReportId`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Escaping (`escape`)
//! - [`escape_html()`] - Neutralize markup in untrusted text
//!
//! ## Prelude
//!
//! ```rust
//! use cronos_core::prelude::*;
//! ```

pub mod error;
pub mod escape;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all CRONOS crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use escape::escape_html;
pub use types::{
    AnalysisRequest, AnalysisResult, Constraints, Finding, Mode, ReportId, RiskScore, Status,
    StatusClass,
};
