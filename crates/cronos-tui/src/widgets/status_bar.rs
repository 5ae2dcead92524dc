//! Key hint bar

use cronos_app::{AppState, Screen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.alert.is_some() {
            return &[("Enter", "dismiss")];
        }
        match self.state.screen {
            Screen::ModeSelection => &[
                ("1", "compliance"),
                ("2", "change"),
                ("Enter", "open"),
                ("q", "quit"),
            ],
            Screen::Form => &[
                ("Tab", "next"),
                ("Ctrl+S", "analyze"),
                ("Ctrl+E", "collapse"),
                ("PgUp/PgDn", "scroll"),
                ("Esc", "back"),
                ("Ctrl+C", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key}"), styles::keybinding()));
            spans.push(Span::styled(format!(" {action} "), styles::text_muted()));
        }
        if self.state.is_submitting() {
            spans.push(Span::styled(" analyzing...", styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cronos_app::Alert;

    #[test]
    fn test_hints_follow_screen() {
        let mut state = AppState::new();
        let mut term = TestTerminal::with_size(100, 1);
        let area = term.area();

        term.render_widget(StatusBar::new(&state), area);
        assert!(term.buffer_contains("compliance"));

        state.screen = Screen::Form;
        term.render_widget(StatusBar::new(&state), area);
        assert!(term.buffer_contains("Ctrl+S analyze"));

        state.alert = Some(Alert::no_report());
        term.render_widget(StatusBar::new(&state), area);
        assert!(term.buffer_contains("dismiss"));
    }
}
