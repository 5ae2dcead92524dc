//! cronos-tui - Terminal UI for the CRONOS analysis console
//!
//! This crate provides the ratatui-based terminal host. It owns an
//! `AppState` from cronos-app and adds terminal rendering, event polling
//! and the run loop that executes controller actions.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
