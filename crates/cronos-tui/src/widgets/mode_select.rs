//! Mode selection screen: one card per workflow

use cronos_app::panel::mode_card;
use cronos_core::Mode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const CARD_HEIGHT: u16 = 7;

pub struct ModeSelect {
    highlighted: Mode,
}

impl ModeSelect {
    pub fn new(highlighted: Mode) -> Self {
        Self { highlighted }
    }
}

impl Widget for ModeSelect {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, band, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(CARD_HEIGHT + 2),
            Constraint::Fill(1),
        ])
        .areas(area);

        let [prompt, cards] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(band);
        Paragraph::new(Line::from(Span::styled(
            "Choose an analysis mode",
            styles::text_secondary(),
        )))
        .alignment(Alignment::Center)
        .render(prompt, buf);

        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .split(cards);

        for (index, (mode, column)) in Mode::ALL.iter().zip(columns.iter()).enumerate() {
            let highlighted = *mode == self.highlighted;
            let (title, blurb) = mode_card(*mode);

            let block = styles::glass_block(highlighted).title(Line::from(vec![
                Span::styled(format!(" [{}] ", index + 1), styles::keybinding()),
                Span::styled(
                    format!("{title} "),
                    if highlighted {
                        styles::accent_bold()
                    } else {
                        styles::text_primary()
                    },
                ),
            ]));
            Paragraph::new(vec![
                Line::from(Span::styled(mode.as_str(), styles::accent())),
                Line::default(),
                Line::from(Span::styled(blurb, styles::text_secondary())),
            ])
            .wrap(Wrap { trim: true })
            .block(block)
            .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_both_cards_rendered() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ModeSelect::new(Mode::Compliance), area);

        assert!(term.buffer_contains("[1]"));
        assert!(term.buffer_contains("Compliance Check"));
        assert!(term.buffer_contains("[2]"));
        assert!(term.buffer_contains("Behavior Change"));
        assert!(term.buffer_contains("Choose an analysis mode"));
    }
}
