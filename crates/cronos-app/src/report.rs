//! Report view model
//!
//! [`ReportView::build`] turns an [`AnalysisResult`] into the ordered list of
//! sections every host displays. Hosts render it with their own escaping
//! (ratatui text, Leptos `view!`); [`render_html`] produces a standalone
//! markup fragment for export and tests.

use std::fmt::Write as _;

use cronos_core::{escape_html, AnalysisResult, Mode, ReportId, StatusClass};

/// Placeholder value for fields the service left out
pub const NOT_AVAILABLE: &str = "N/A";

/// Result panel text before the first analysis
pub const PLACEHOLDER_TITLE: &str = "Click \"Analyze\" to see output here.";
pub const PLACEHOLDER_HINT: &str = "Your analysis results will appear in this section";

/// Kind of a report section, used by hosts for icons and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Technical,
    Human,
    Solution,
    Findings,
}

impl SectionKind {
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Technical => "Technical Explanation",
            SectionKind::Human => "Human Explanation",
            SectionKind::Solution => "AI Suggested Solution",
            SectionKind::Findings => "Analyzer Findings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub body: String,
}

impl ReportSection {
    pub fn heading(&self) -> &'static str {
        self.kind.heading()
    }
}

/// Display-ready report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub class: StatusClass,
    /// Mode the report is labeled with
    pub mode: Mode,
    pub status: String,
    pub risk_score: String,
    /// Explanation sections, in display order
    pub sections: Vec<ReportSection>,
    /// `(label, value)` rows of the metadata block
    pub metadata: Vec<(&'static str, String)>,
    pub report_id: Option<ReportId>,
}

impl ReportView {
    /// Build the view for `result`, labeling it with the mode the service
    /// echoed back or `requested` when it did not
    pub fn build(result: &AnalysisResult, requested: Mode) -> Self {
        let mode = result.mode.unwrap_or(requested);
        let mut sections = vec![ReportSection {
            kind: SectionKind::Technical,
            body: or_na(result.technical_explanation.as_deref()),
        }];

        if mode == Mode::Change {
            sections.push(ReportSection {
                kind: SectionKind::Human,
                body: or_na(result.human_explanation.as_deref()),
            });
        }

        if mode == Mode::Compliance {
            if let Some(solution) = result.solution() {
                sections.push(ReportSection {
                    kind: SectionKind::Solution,
                    body: solution.to_string(),
                });
            }
        }

        if !result.analyzer_findings.is_empty() {
            let mut body = String::new();
            for finding in &result.analyzer_findings {
                let _ = writeln!(body, "{} (risk {})", finding.name, finding.risk);
                for item in &finding.findings {
                    let _ = writeln!(body, "  - {item}");
                }
            }
            sections.push(ReportSection {
                kind: SectionKind::Findings,
                body: body.trim_end().to_string(),
            });
        }

        let report_id = result.usable_report_id().cloned();
        let metadata = vec![
            (
                "Report ID",
                report_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Timestamp", or_na(Some(result.timestamp.as_str()))),
            ("AI Provider", or_na(Some(result.ai_provider.as_str()))),
        ];

        Self {
            class: result.status.class(),
            mode,
            status: result.status.to_string(),
            risk_score: result
                .risk_score
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            sections,
            metadata,
            report_id,
        }
    }

    pub fn title(&self) -> String {
        format!("Analysis Report ({})", self.mode)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Collapse button label for the given state
pub fn collapse_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Expand"
    } else {
        "Collapse"
    }
}

/// Render the report as an HTML fragment
///
/// Every value that came from the service or the user is escaped.
pub fn render_html(view: &ReportView) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<div class="result-box {}">"#,
        view.class.css_class()
    );
    let _ = writeln!(
        html,
        r#"<div class="result-header"><h3>{}</h3><button class="collapse-btn" data-collapse>{}</button></div>"#,
        escape_html(&view.title()),
        collapse_label(false)
    );
    html.push_str("<div id=\"collapsibleContent\" class=\"collapsible-content\">\n");
    let _ = writeln!(
        html,
        r#"<section class="result-section"><strong>Status:</strong> {}<br/><strong>Risk Score:</strong> {}</section>"#,
        escape_html(&view.status),
        escape_html(&view.risk_score)
    );
    for section in &view.sections {
        let _ = writeln!(
            html,
            r#"<section class="result-section"><h4>{}</h4><pre>{}</pre></section>"#,
            section.heading(),
            escape_html(&section.body)
        );
    }
    html.push_str("<section class=\"result-section\"><h4>Metadata</h4><pre>");
    for (label, value) in &view.metadata {
        let _ = write!(html, "\n{}: {}", label, escape_html(value));
    }
    html.push_str("\n</pre></section>\n</div>\n</div>\n");
    html
}
