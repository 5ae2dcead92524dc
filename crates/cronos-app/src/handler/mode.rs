//! Mode selection and back navigation

use cronos_core::prelude::*;
use cronos_core::Mode;

use crate::form::FocusTarget;
use crate::state::{AppState, ResultPanel, Screen, ScrollTarget};

use super::UpdateResult;

/// Choose a workflow: show the form with that mode's panel layout
pub fn handle_select_mode(state: &mut AppState, mode: Mode) -> UpdateResult {
    info!("Mode selected: {}", mode);
    state.mode = Some(mode);
    state.highlighted_mode = mode;
    state.screen = Screen::Form;

    // Focus may sit on a panel the new layout hides
    if !FocusTarget::order(mode).contains(&state.form.focus) {
        state.form.focus = FocusTarget::default();
    }

    state.scroll_request = Some(ScrollTarget::Top);
    UpdateResult::none()
}

/// Return to the mode cards, discarding the form, the report and any
/// request still in flight
pub fn handle_back_to_mode_selection(state: &mut AppState) -> UpdateResult {
    if let Some(seq) = state.in_flight.take() {
        debug!("Discarding in-flight analysis #{}", seq);
    }

    state.mode = None;
    state.screen = Screen::ModeSelection;
    state.form.clear();
    state.result = ResultPanel::Placeholder;
    state.last_result = None;
    state.last_report_id = None;
    state.report_scroll = 0;
    state.scroll_request = Some(ScrollTarget::Top);
    UpdateResult::none()
}
