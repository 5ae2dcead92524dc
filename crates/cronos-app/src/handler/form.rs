//! Form editing handlers

use crate::form::{ConstraintKind, EditorInput, Field};
use crate::state::{AppState, Screen};

use super::UpdateResult;

pub fn handle_field_input(state: &mut AppState, field: Field, value: &str) -> UpdateResult {
    state.form.field_mut(field).set_text(value);
    UpdateResult::none()
}

/// Apply a keystroke to the focused text area; ignored when focus is on a
/// checkbox or the analyze button
pub fn handle_editor_input(state: &mut AppState, input: EditorInput) -> UpdateResult {
    if let Some(field) = state.form.focus.field() {
        state.form.field_mut(field).apply(input);
    }
    UpdateResult::none()
}

pub fn handle_toggle_constraint(state: &mut AppState, kind: ConstraintKind) -> UpdateResult {
    state.form.toggle_constraint(kind);
    UpdateResult::none()
}

pub fn handle_set_constraint(
    state: &mut AppState,
    kind: ConstraintKind,
    checked: bool,
) -> UpdateResult {
    kind.set(&mut state.form.constraints, checked);
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if let (Screen::Form, Some(mode)) = (state.screen, state.mode) {
        state.form.cycle_focus(mode, forward);
    }
    UpdateResult::none()
}
