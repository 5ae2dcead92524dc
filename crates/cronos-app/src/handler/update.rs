//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{form, keys::handle_key, mode, report, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_submitting() {
                state.tick = state.tick.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectMode(selected) => mode::handle_select_mode(state, selected),
        Message::BackToModeSelection => mode::handle_back_to_mode_selection(state),
        Message::HighlightMode(highlighted) => {
            state.highlighted_mode = highlighted;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Editing
        // ─────────────────────────────────────────────────────────
        Message::FieldInput { field, value } => form::handle_field_input(state, field, &value),
        Message::EditorInput(input) => form::handle_editor_input(state, input),
        Message::ToggleConstraint(kind) => form::handle_toggle_constraint(state, kind),
        Message::SetConstraint { kind, checked } => form::handle_set_constraint(state, kind, checked),
        Message::FocusNext => form::handle_focus(state, true),
        Message::FocusPrev => form::handle_focus(state, false),

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::Analyze => submit::handle_analyze(state),
        Message::AnalysisCompleted { seq, outcome } => {
            submit::handle_analysis_completed(state, seq, outcome)
        }

        // ─────────────────────────────────────────────────────────
        // Report
        // ─────────────────────────────────────────────────────────
        Message::ToggleCollapse => report::handle_toggle_collapse(state),
        Message::ScrollReport(delta) => report::handle_scroll_report(state, delta),
        Message::Download(format) => report::handle_download(state, format),

        Message::DismissAlert => {
            state.alert = None;
            UpdateResult::none()
        }
    }
}
