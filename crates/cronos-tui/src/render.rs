//! Main render/view function (View in TEA pattern)

use cronos_app::{AppState, Field, FocusTarget, PanelLayout, Screen};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use super::{layout, theme::palette, widgets};
use crate::widgets::{ConstraintsPanel, ResultPanelView, TextAreaView};

#[cfg(test)]
mod tests;

const SOURCE_HINT: &str = "Paste the code to analyze";

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; scroll requests are consumed by the runner.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.mode, state.api_base.as_str()),
        areas.header,
    );

    match (state.screen, state.layout()) {
        (Screen::Form, Some(panels)) => render_form(frame, state, panels, areas.body),
        _ => frame.render_widget(widgets::ModeSelect::new(state.highlighted_mode), areas.body),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert), area);
    }
}

fn render_form(frame: &mut Frame, state: &AppState, panels: PanelLayout, body: Rect) {
    let areas = layout::split_form(body);
    let form = &state.form;
    let ui = &state.settings.ui;
    let rows = |field: Field| {
        form.field(field)
            .display_rows(ui.editor_min_rows, ui.editor_max_rows)
    };

    let mut heights = vec![TextAreaView::height(rows(Field::SourceCode))];
    if panels.show_conditions {
        heights.push(TextAreaView::height(
            rows(Field::OldCondition).max(rows(Field::NewCondition)),
        ));
    }
    heights.push(TextAreaView::height(rows(Field::ExpectedOutput)));
    heights.push(ConstraintsPanel::HEIGHT);

    let mut constraints: Vec<Constraint> = heights.into_iter().map(Constraint::Length).collect();
    constraints.push(Constraint::Fill(1));
    let chunks = Layout::vertical(constraints).split(areas.inputs);
    let mut next = chunks.iter().copied();

    // (field, badge, hint, area) in display order
    let mut editors: Vec<(Field, &str, Option<&str>, Rect)> = Vec::with_capacity(4);
    if let Some(area) = next.next() {
        editors.push((Field::SourceCode, panels.source_badge(), Some(SOURCE_HINT), area));
    }
    if let Some((old_badge, new_badge)) = panels.condition_badges() {
        if let Some(area) = next.next() {
            let [old, new] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
            editors.push((Field::OldCondition, old_badge, None, old));
            editors.push((Field::NewCondition, new_badge, None, new));
        }
    }
    if let Some(area) = next.next() {
        editors.push((
            Field::ExpectedOutput,
            panels.expected_badge,
            Some(panels.expected_hint),
            area,
        ));
    }

    let focused_field = form.focus.field();
    for (field, badge, hint, area) in &editors {
        let view = TextAreaView::new(form.field(*field), badge, field.label())
            .hint(*hint)
            .focused(focused_field == Some(*field));
        frame.render_widget(view, *area);
    }

    if let Some(area) = next.next() {
        let focused_constraint = match form.focus {
            FocusTarget::Constraint(kind) => Some(kind),
            _ => None,
        };
        frame.render_widget(
            ConstraintsPanel::new(panels.constraints_badge, form.constraints, panels.analyze_label)
                .focused_constraint(focused_constraint)
                .analyze_focused(form.focus == FocusTarget::AnalyzeButton)
                .analyze_enabled(state.can_analyze()),
            area,
        );
    }

    frame.render_widget(
        ResultPanelView::new(&state.result)
            .downloads_enabled(state.downloads_enabled())
            .scroll(state.report_scroll)
            .tick(state.tick),
        areas.result,
    );

    // Hardware cursor in the focused editor, hidden behind an alert
    if state.alert.is_some() {
        return;
    }
    let Some(field) = focused_field else {
        return;
    };
    if let Some((_, badge, _, area)) = editors.iter().find(|(f, ..)| *f == field) {
        let view = TextAreaView::new(form.field(field), badge, field.label());
        if let Some(position) = view.cursor_position(*area) {
            frame.set_cursor_position(position);
        }
    }
}
