//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use cronos_app::{update, AnalysisFailure, AppState, Message};
use cronos_client::test_utils::sample_result;
use cronos_core::Mode;

fn render_screen(state: &AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.draw_with(|frame| view(frame, state));
    term
}

fn form_state(mode: Mode) -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::SelectMode(mode));
    state
}

#[test]
fn test_mode_selection_screen() {
    let state = AppState::new();
    let term = render_screen(&state, 100, 30);

    assert!(term.buffer_contains("CRONOS"));
    assert!(term.buffer_contains("Compliance Check"));
    assert!(term.buffer_contains("Behavior Change"));
    assert!(term.buffer_contains("http://127.0.0.1:8000"));
}

#[test]
fn test_compliance_form_hides_condition_panels() {
    let state = form_state(Mode::Compliance);
    let term = render_screen(&state, 120, 40);

    assert!(term.buffer_contains("Source Code"));
    assert!(term.buffer_contains("Expected Output"));
    assert!(term.buffer_contains("Describe the expected behavior (contract)"));
    assert!(term.buffer_contains("[ Check Compliance ]"));
    assert!(!term.buffer_contains("Old Condition"));
    assert!(!term.buffer_contains("New Condition"));
    assert!(term.buffer_contains("Click \"Analyze\" to see output here."));
}

#[test]
fn test_change_form_shows_all_panels() {
    let state = form_state(Mode::Change);
    let term = render_screen(&state, 120, 50);

    assert!(term.buffer_contains("Old Condition"));
    assert!(term.buffer_contains("New Condition"));
    assert!(term.buffer_contains(" 04 "));
    assert!(term.buffer_contains(" 05 "));
    assert!(term.buffer_contains("[ Analyze Change ]"));
}

#[test]
fn test_report_after_successful_analysis() {
    let mut state = form_state(Mode::Compliance);
    update(&mut state, Message::Analyze);
    let seq = state.in_flight.unwrap();
    update(
        &mut state,
        Message::AnalysisCompleted {
            seq,
            outcome: Ok(sample_result(Mode::Compliance, "PASS", "rep-1")),
        },
    );

    let term = render_screen(&state, 140, 45);
    assert!(term.buffer_contains("Analysis Report (COMPLIANCE)"));
    assert!(term.buffer_contains("Status: PASS"));
    assert!(term.buffer_contains("Report ID: rep-1"));
}

#[test]
fn test_failure_replaces_report() {
    let mut state = form_state(Mode::Change);
    update(&mut state, Message::Analyze);
    let seq = state.in_flight.unwrap();
    update(
        &mut state,
        Message::AnalysisCompleted {
            seq,
            outcome: Err(AnalysisFailure::new("connection refused")),
        },
    );

    let term = render_screen(&state, 140, 50);
    assert!(term.buffer_contains("Analysis failed"));
    assert!(term.buffer_contains("connection refused"));
}

#[test]
fn test_alert_overlay() {
    let mut state = form_state(Mode::Compliance);
    update(&mut state, Message::Download(cronos_app::ReportFormat::Pdf));

    let term = render_screen(&state, 100, 30);
    assert!(term.buffer_contains("Run analysis first"));
    assert!(term.buffer_contains("Notice"));
}

#[test]
fn test_narrow_terminal_stacks_panels() {
    let state = form_state(Mode::Compliance);
    let term = render_screen(&state, 60, 50);

    assert!(term.buffer_contains("Source Code"));
    assert!(term.buffer_contains("Result"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let state = form_state(Mode::Change);
    let _ = render_screen(&state, 10, 5);
}
