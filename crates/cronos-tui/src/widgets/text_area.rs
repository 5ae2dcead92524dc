//! Bordered multi-line text input with a numbered badge

use cronos_app::TextArea;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct TextAreaView<'a> {
    text: &'a TextArea,
    badge: &'a str,
    label: &'a str,
    hint: Option<&'a str>,
    focused: bool,
}

impl<'a> TextAreaView<'a> {
    pub fn new(text: &'a TextArea, badge: &'a str, label: &'a str) -> Self {
        Self {
            text,
            badge,
            label,
            hint: None,
            focused: false,
        }
    }

    /// Placeholder shown while the field is empty
    pub fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Outer height for `rows` visible text rows
    pub fn height(rows: u16) -> u16 {
        rows.saturating_add(2)
    }

    /// First visible line so the cursor row stays in view
    fn scroll_offset(&self, visible_rows: u16) -> usize {
        let (row, _) = self.text.cursor();
        row.saturating_sub(usize::from(visible_rows.max(1)) - 1)
    }

    /// Terminal cursor position when rendered into `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = styles::glass_block(false).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (row, col) = self.text.cursor();
        let visible_row = row - self.scroll_offset(inner.height);
        let x = inner.x + u16::try_from(col).unwrap_or(u16::MAX).min(inner.width - 1);
        let y = inner.y + u16::try_from(visible_row).unwrap_or(0);
        Some(Position::new(x, y))
    }
}

impl Widget for TextAreaView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.badge), styles::badge()),
            Span::raw(" "),
            Span::styled(
                format!("{} ", self.label),
                if self.focused {
                    styles::accent_bold()
                } else {
                    styles::text_primary()
                },
            ),
        ]);
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.text.is_empty() {
            if let Some(hint) = self.hint {
                Paragraph::new(Span::styled(
                    hint,
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                ))
                .render(inner, buf);
            }
            return;
        }

        let lines: Vec<Line> = self
            .text
            .lines()
            .iter()
            .skip(self.scroll_offset(inner.height))
            .take(usize::from(inner.height))
            .map(|line| Line::from(line.trim_end_matches('\r')))
            .collect();
        Paragraph::new(lines)
            .style(styles::text_primary())
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_badge_label_and_text() {
        let text = TextArea::from_text("def f(x):\n    return x");
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(TextAreaView::new(&text, "01", "Source Code"), Rect::new(0, 0, 40, 6));

        assert!(term.buffer_contains("01"));
        assert!(term.buffer_contains("Source Code"));
        assert!(term.buffer_contains("def f(x):"));
        assert!(term.buffer_contains("return x"));
    }

    #[test]
    fn test_hint_shown_when_empty() {
        let text = TextArea::new();
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(
            TextAreaView::new(&text, "02", "Expected Output")
                .hint(Some("Describe the expected behavior (contract)")),
            Rect::new(0, 0, 60, 5),
        );

        assert!(term.buffer_contains("Describe the expected behavior (contract)"));
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let text = TextArea::from_text("l1\nl2\nl3\nl4\nl5");
        let mut term = TestTerminal::with_size(20, 4);
        let area = Rect::new(0, 0, 20, 4);
        let view = TextAreaView::new(&text, "01", "Src");
        let cursor = view.cursor_position(area).unwrap();
        term.render_widget(view, area);

        // Two visible rows: l4 and l5
        assert!(term.buffer_contains("l5"));
        assert!(term.buffer_contains("l4"));
        assert!(!term.buffer_contains("l3"));
        assert_eq!(cursor, Position::new(3, 2));
    }

    #[test]
    fn test_carriage_returns_not_drawn() {
        let text = TextArea::from_text("alpha\r\nbeta\r");
        let mut term = TestTerminal::with_size(30, 5);
        term.render_widget(TextAreaView::new(&text, "01", "Src"), Rect::new(0, 0, 30, 5));

        assert!(term.buffer_contains("alpha"));
        assert!(term.buffer_contains("beta"));
        assert!(!term.buffer_contains("\r"));
    }

    #[test]
    fn test_height_adds_borders() {
        assert_eq!(TextAreaView::height(6), 8);
    }
}
