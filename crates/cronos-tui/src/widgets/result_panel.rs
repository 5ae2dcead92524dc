//! Result panel: placeholder, progress, report or failure

use cronos_app::report::{collapse_label, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};
use cronos_app::{ReportView, ResultPanel};
use cronos_core::StatusClass;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ResultPanelView<'a> {
    panel: &'a ResultPanel,
    downloads_enabled: bool,
    scroll: u16,
    tick: u64,
}

impl<'a> ResultPanelView<'a> {
    pub fn new(panel: &'a ResultPanel) -> Self {
        Self {
            panel,
            downloads_enabled: false,
            scroll: 0,
            tick: 0,
        }
    }

    pub fn downloads_enabled(mut self, enabled: bool) -> Self {
        self.downloads_enabled = enabled;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        match self.panel {
            ResultPanel::Placeholder => {
                let [_, middle, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(3),
                    Constraint::Fill(1),
                ])
                .areas(area);
                Paragraph::new(vec![
                    Line::from(Span::styled(PLACEHOLDER_TITLE, styles::text_primary())),
                    Line::default(),
                    Line::from(Span::styled(PLACEHOLDER_HINT, styles::text_muted())),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(middle, buf);
            }
            ResultPanel::Pending => {
                let frame = SPINNER[(self.tick % SPINNER.len() as u64) as usize];
                Paragraph::new(Line::from(vec![
                    Span::styled(frame, styles::accent()),
                    Span::styled(" Analyzing...", styles::text_secondary()),
                ]))
                .render(area, buf);
            }
            ResultPanel::Report { view, collapsed } => {
                Paragraph::new(report_lines(view, *collapsed))
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0))
                    .render(area, buf);
            }
            ResultPanel::Failed { message } => {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Analysis failed",
                        styles::status_class(StatusClass::Error),
                    )),
                    Line::default(),
                    Line::from(Span::styled(message.as_str(), styles::text_primary())),
                ])
                .wrap(Wrap { trim: false })
                .render(area, buf);
            }
        }
    }

    fn render_downloads(&self, area: Rect, buf: &mut Buffer) {
        let (key_style, label_style) = if self.downloads_enabled {
            (styles::keybinding(), styles::text_secondary())
        } else {
            (styles::text_muted(), styles::text_muted())
        };
        Paragraph::new(Line::from(vec![
            Span::styled("Ctrl+J", key_style),
            Span::styled(" Download JSON  ", label_style),
            Span::styled("Ctrl+P", key_style),
            Span::styled(" Download PDF", label_style),
        ]))
        .render(area, buf);
    }
}

impl Widget for ResultPanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = match self.panel {
            ResultPanel::Report { view, .. } => styles::status_class(view.class),
            ResultPanel::Failed { .. } => styles::status_class(StatusClass::Error),
            _ => styles::border_inactive(),
        };
        let block = styles::glass_block(false)
            .border_style(border)
            .title(Span::styled(" Result ", styles::text_primary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        self.render_body(body, buf);
        self.render_downloads(footer, buf);
    }
}

/// Text lines of a report; only the header line when collapsed
pub fn report_lines(view: &ReportView, collapsed: bool) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(view.title(), styles::status_class(view.class)),
        Span::styled("  Ctrl+E ", styles::keybinding()),
        Span::styled(collapse_label(collapsed), styles::text_secondary()),
    ])];
    if collapsed {
        return lines;
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Status: ", styles::accent_bold()),
        Span::styled(view.status.as_str(), styles::status_class(view.class)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Risk Score: ", styles::accent_bold()),
        Span::styled(view.risk_score.as_str(), styles::text_primary()),
    ]));

    for section in &view.sections {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(section.heading(), styles::accent_bold())));
        lines.extend(
            section
                .body
                .lines()
                .map(|l| Line::from(Span::styled(l, styles::text_primary()))),
        );
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Metadata", styles::accent_bold())));
    for (label, value) in &view.metadata {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), styles::text_secondary()),
            Span::styled(value.as_str(), styles::text_primary()),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cronos_client::test_utils::sample_result;
    use cronos_core::Mode;

    fn report(collapsed: bool) -> ResultPanel {
        let result = sample_result(Mode::Compliance, "FAIL", "abc123");
        ResultPanel::Report {
            view: ReportView::build(&result, Mode::Compliance),
            collapsed,
        }
    }

    #[test]
    fn test_placeholder() {
        let panel = ResultPanel::Placeholder;
        let mut term = TestTerminal::with_size(70, 12);
        let area = term.area();
        term.render_widget(ResultPanelView::new(&panel), area);

        assert!(term.buffer_contains("Click \"Analyze\" to see output here."));
        assert!(term.buffer_contains("Your analysis results will appear in this section"));
    }

    #[test]
    fn test_report_sections_rendered() {
        let panel = report(false);
        let mut term = TestTerminal::with_size(70, 30);
        let area = term.area();
        term.render_widget(ResultPanelView::new(&panel).downloads_enabled(true), area);

        assert!(term.buffer_contains("Analysis Report (COMPLIANCE)"));
        assert!(term.buffer_contains("Collapse"));
        assert!(term.buffer_contains("Status: FAIL"));
        assert!(term.buffer_contains("Risk Score: 60"));
        assert!(term.buffer_contains("Technical Explanation"));
        assert!(term.buffer_contains("AI Suggested Solution"));
        assert!(!term.buffer_contains("Human Explanation"));
        assert!(term.buffer_contains("Report ID: abc123"));
        assert!(term.buffer_contains("AI Provider: OpenRouter"));
        assert!(term.buffer_contains("Download JSON"));
    }

    #[test]
    fn test_collapsed_report_hides_body() {
        let panel = report(true);
        let mut term = TestTerminal::with_size(70, 20);
        let area = term.area();
        term.render_widget(ResultPanelView::new(&panel), area);

        assert!(term.buffer_contains("Expand"));
        assert!(!term.buffer_contains("Technical Explanation"));
    }

    #[test]
    fn test_failure() {
        let panel = ResultPanel::Failed {
            message: "could not reach the analysis service".into(),
        };
        let mut term = TestTerminal::with_size(70, 10);
        let area = term.area();
        term.render_widget(ResultPanelView::new(&panel), area);

        assert!(term.buffer_contains("Analysis failed"));
        assert!(term.buffer_contains("could not reach the analysis service"));
    }

    #[test]
    fn test_pending_spinner() {
        let panel = ResultPanel::Pending;
        let mut term = TestTerminal::with_size(40, 6);
        let area = term.area();
        term.render_widget(ResultPanelView::new(&panel).tick(3), area);

        assert!(term.buffer_contains("Analyzing..."));
    }
}
