//! Constraint checkboxes and the analyze button

use cronos_app::ConstraintKind;
use cronos_core::Constraints;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct ConstraintsPanel<'a> {
    badge: &'a str,
    constraints: Constraints,
    focused_constraint: Option<ConstraintKind>,
    analyze_label: &'a str,
    analyze_focused: bool,
    analyze_enabled: bool,
}

impl<'a> ConstraintsPanel<'a> {
    /// Borders + two checkboxes + spacer + button
    pub const HEIGHT: u16 = 6;

    pub fn new(badge: &'a str, constraints: Constraints, analyze_label: &'a str) -> Self {
        Self {
            badge,
            constraints,
            focused_constraint: None,
            analyze_label,
            analyze_focused: false,
            analyze_enabled: true,
        }
    }

    pub fn focused_constraint(mut self, kind: Option<ConstraintKind>) -> Self {
        self.focused_constraint = kind;
        self
    }

    pub fn analyze_focused(mut self, focused: bool) -> Self {
        self.analyze_focused = focused;
        self
    }

    /// Disabled while a request is in flight
    pub fn analyze_enabled(mut self, enabled: bool) -> Self {
        self.analyze_enabled = enabled;
        self
    }
}

impl Widget for ConstraintsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focused_constraint.is_some() || self.analyze_focused;
        let block = styles::glass_block(focused).title(Line::from(vec![
            Span::styled(format!(" {} ", self.badge), styles::badge()),
            Span::styled(" Constraints ", styles::text_primary()),
        ]));

        let mut lines: Vec<Line> = ConstraintKind::ALL
            .iter()
            .map(|kind| {
                let checked = kind.get(&self.constraints);
                let focused = self.focused_constraint == Some(*kind);
                let style = if focused {
                    styles::accent_bold()
                } else {
                    styles::text_primary()
                };
                Line::from(vec![
                    Span::styled(if checked { "[x] " } else { "[ ] " }, style),
                    Span::styled(kind.label(), style),
                ])
            })
            .collect();
        lines.push(Line::default());

        let button_style = if !self.analyze_enabled {
            styles::text_muted()
        } else if self.analyze_focused {
            Style::default()
                .fg(palette::BADGE_FG)
                .bg(palette::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::accent_bold()
        };
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", self.analyze_label),
            button_style,
        )));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
