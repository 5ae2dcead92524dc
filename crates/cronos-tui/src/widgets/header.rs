//! Header bar widget

use cronos_core::Mode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing the app title, the selected mode and the server
pub struct MainHeader<'a> {
    mode: Option<Mode>,
    server: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(mode: Option<Mode>, server: &'a str) -> Self {
        Self { mode, server }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title = vec![Span::styled("CRONOS", styles::accent_bold())];
        match self.mode {
            Some(mode) => {
                title.push(Span::styled(" · ", styles::text_muted()));
                title.push(Span::styled(mode.as_str(), styles::text_primary()));
            }
            None => {
                title.push(Span::styled(" · select a mode", styles::text_muted()));
            }
        }
        Paragraph::new(Line::from(title)).render(inner, buf);

        Paragraph::new(Line::from(Span::styled(self.server, styles::text_secondary())))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_mode_and_server() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(
            MainHeader::new(Some(Mode::Change), "http://127.0.0.1:8000/"),
            area,
        );

        assert!(term.buffer_contains("CRONOS"));
        assert!(term.buffer_contains("CHANGE"));
        assert!(term.buffer_contains("http://127.0.0.1:8000/"));
    }

    #[test]
    fn test_header_without_mode() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(MainHeader::new(None, "http://localhost/"), area);

        assert!(term.buffer_contains("select a mode"));
    }
}
