//! Modal alert dialog

use cronos_app::Alert;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::styles;

const MIN_WIDTH: u16 = 32;
const MAX_WIDTH: u16 = 64;
const HEIGHT: u16 = 7;

pub struct AlertDialog<'a> {
    alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let text_width = u16::try_from(self.alert.message.chars().count()).unwrap_or(MAX_WIDTH);
        let width = text_width.saturating_add(6).clamp(MIN_WIDTH, MAX_WIDTH);
        let modal = centered_rect(width, HEIGHT, area);

        render_shadow(buf, modal);
        Clear.render(modal, buf);

        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(self.alert.message.as_str(), styles::text_primary())),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" OK", styles::text_secondary()),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(styles::modal_block(" Notice "))
        .render(modal, buf);
    }
}
