//! cronos-app - The client controller for the CRONOS analysis console
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] owned by the host, a [`Message`] enum describing everything
//! that can happen, and a pure [`handler::update`] function. Side effects
//! (the analyze call, opening a download) come back as [`UpdateAction`]s
//! which the host executes: the terminal host through [`actions`], the
//! browser host through `spawn_local`.
//!
//! Nothing here touches the DOM or the terminal, so the same controller
//! drives the browser page, the TUI and the headless runner.

pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod report;
pub mod state;

#[cfg(not(target_arch = "wasm32"))]
pub mod actions;
#[cfg(not(target_arch = "wasm32"))]
pub mod process;
#[cfg(not(target_arch = "wasm32"))]
pub mod signals;

// Re-export primary types
pub use form::{ConstraintKind, EditorInput, Field, FocusTarget, FormState, TextArea};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{AnalysisFailure, Message};
pub use panel::PanelLayout;
pub use report::{render_html, ReportSection, ReportView, SectionKind};
pub use state::{Alert, AppState, ResultPanel, Screen, ScrollTarget};

// Re-export transport types hosts need alongside the controller
pub use cronos_client::{ApiBase, ReportFormat};
