//! Key event handlers for each screen

use cronos_client::ReportFormat;
use cronos_core::Mode;

use crate::form::{EditorInput, FocusTarget};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Lines scrolled by PageUp/PageDown in the report panel
const REPORT_PAGE: i32 = 10;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.alert.is_some() {
        return handle_key_alert(key);
    }

    match state.screen {
        Screen::ModeSelection => handle_key_mode_selection(state, key),
        Screen::Form => handle_key_form(state, key),
    }
}

/// Handle key events while an alert is shown
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        _ => None,
    }
}

/// Handle key events on the mode cards
fn handle_key_mode_selection(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1' | 'c') => Some(Message::SelectMode(Mode::Compliance)),
        InputKey::Char('2' | 'h') => Some(Message::SelectMode(Mode::Change)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Up | InputKey::Left | InputKey::Char('k') => {
            Some(Message::HighlightMode(Mode::Compliance))
        }
        InputKey::Down | InputKey::Right | InputKey::Char('j') => {
            Some(Message::HighlightMode(Mode::Change))
        }
        InputKey::Tab | InputKey::BackTab => Some(Message::HighlightMode(
            match state.highlighted_mode {
                Mode::Compliance => Mode::Change,
                Mode::Change => Mode::Compliance,
            },
        )),
        InputKey::Enter | InputKey::Char(' ') => {
            Some(Message::SelectMode(state.highlighted_mode))
        }
        _ => None,
    }
}

/// Handle key events on the analysis form
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    // Global form shortcuts first
    match key {
        InputKey::Esc => return Some(Message::BackToModeSelection),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::CharCtrl('s') | InputKey::F(5) => return Some(Message::Analyze),
        InputKey::CharCtrl('j') => return Some(Message::Download(ReportFormat::Json)),
        InputKey::CharCtrl('p') => return Some(Message::Download(ReportFormat::Pdf)),
        InputKey::CharCtrl('e') => return Some(Message::ToggleCollapse),
        InputKey::PageUp => return Some(Message::ScrollReport(-REPORT_PAGE)),
        InputKey::PageDown => return Some(Message::ScrollReport(REPORT_PAGE)),
        _ => {}
    }

    match state.form.focus {
        FocusTarget::Field(_) => editor_input(key).map(Message::EditorInput),
        FocusTarget::Constraint(kind) => match key {
            InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleConstraint(kind)),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            _ => None,
        },
        FocusTarget::AnalyzeButton => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::Analyze),
            InputKey::Up => Some(Message::FocusPrev),
            _ => None,
        },
    }
}

/// Map an editing key to a text area operation
fn editor_input(key: InputKey) -> Option<EditorInput> {
    match key {
        InputKey::Char(c) => Some(EditorInput::Char(c)),
        InputKey::Enter => Some(EditorInput::Newline),
        InputKey::Backspace => Some(EditorInput::Backspace),
        InputKey::Delete => Some(EditorInput::Delete),
        InputKey::Left => Some(EditorInput::Left),
        InputKey::Right => Some(EditorInput::Right),
        InputKey::Up => Some(EditorInput::Up),
        InputKey::Down => Some(EditorInput::Down),
        InputKey::Home => Some(EditorInput::Home),
        InputKey::End => Some(EditorInput::End),
        _ => None,
    }
}
