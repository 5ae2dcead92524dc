//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `mode`: Mode selection and back navigation
//! - `form`: Field edits, checkboxes and focus
//! - `submit`: Analyze submission and completion
//! - `report`: Collapse, scrolling and downloads
//! - `keys`: Key event handlers for each screen

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod mode;
pub(crate) mod report;
pub(crate) mod submit;
pub(crate) mod update;


use cronos_core::AnalysisRequest;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the host should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Perform one `POST /analyze` and answer with
    /// `Message::AnalysisCompleted { seq, .. }`
    AnalyzeRequest { seq: u64, request: AnalysisRequest },

    /// Open a download URL (new browser tab or system browser)
    OpenUrl { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
