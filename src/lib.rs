//! CRONOS console library
//!
//! Entry points for the `cronos` binary. The terminal UI lives in
//! `cronos-tui`; the NDJSON headless runner lives here.

pub mod headless;

// Re-export main entry points
pub use cronos_tui::run;
pub use headless::runner::{run_headless, run_with_api, HeadlessOptions};
pub use headless::HeadlessEvent;
