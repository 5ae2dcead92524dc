//! Headless mode runner - one analysis without the TUI
//!
//! Drives the controller with the same messages the terminal host produces
//! and reports the outcome as [`HeadlessEvent`]s.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use cronos_app::message::Message;
use cronos_app::process::process_message;
use cronos_app::{render_html, AppState, ConstraintKind, Field, ReportFormat, ResultPanel};
use cronos_client::{AnalyzeApi, HttpAnalyzeClient};
use cronos_core::prelude::*;
use cronos_core::{Constraints, Mode};

use super::HeadlessEvent;

/// What to submit in headless mode
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub mode: Mode,
    pub source_code: String,
    pub expected_output: String,
    /// Ignored in COMPLIANCE mode
    pub old_condition: String,
    /// Ignored in COMPLIANCE mode
    pub new_condition: String,
    pub constraints: Constraints,
    /// Write the rendered report fragment here on success
    pub html_out: Option<PathBuf>,
}

/// Run one analysis against the configured service, printing NDJSON events
///
/// Returns whether the service produced a report.
pub async fn run_headless(state: AppState, options: HeadlessOptions) -> Result<bool> {
    info!("═══════════════════════════════════════════════════════");
    info!("CRONOS starting in HEADLESS mode");
    info!("Service: {}", state.api_base.as_str());
    info!("═══════════════════════════════════════════════════════");

    let api = match HttpAnalyzeClient::new(state.api_base.clone(), state.settings.request_timeout())
    {
        Ok(api) => Arc::new(api),
        Err(e) => {
            HeadlessEvent::error(e.to_string(), true).emit();
            return Err(e);
        }
    };

    let result = run_with_api(state, options, api, |event| event.emit()).await;
    if let Err(ref e) = result {
        error!("Headless run failed: {:?}", e);
        HeadlessEvent::error(e.to_string(), true).emit();
    }

    info!("CRONOS headless mode exiting");
    result
}

/// Run one analysis through `api`, passing every event to `emit`
pub async fn run_with_api<A, F>(
    mut state: AppState,
    options: HeadlessOptions,
    api: Arc<A>,
    mut emit: F,
) -> Result<bool>
where
    A: AnalyzeApi + Send + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);

    process_message(&mut state, Message::SelectMode(options.mode), &msg_tx, &api);
    emit(HeadlessEvent::mode_selected(options.mode));

    for message in form_messages(&options) {
        process_message(&mut state, message, &msg_tx, &api);
    }

    process_message(&mut state, Message::Analyze, &msg_tx, &api);
    let Some(seq) = state.in_flight else {
        // The controller raised an alert instead of submitting
        let message = state
            .take_alert()
            .map(|a| a.message)
            .unwrap_or_else(|| "Analysis was not submitted".to_string());
        emit(HeadlessEvent::error(message, true));
        return Ok(false);
    };
    emit(HeadlessEvent::analysis_started(options.mode, seq));

    let mut failure_status = None;
    while state.in_flight.is_some() {
        let message = msg_rx.recv().await.ok_or(Error::ChannelClosed)?;
        if let Message::AnalysisCompleted {
            outcome: Err(failure),
            ..
        } = &message
        {
            failure_status = failure.status;
        }
        process_message(&mut state, message, &msg_tx, &api);
    }

    match &state.result {
        ResultPanel::Report { view, .. } => {
            emit(HeadlessEvent::analysis_completed(
                &view.status,
                &view.risk_score,
                view.report_id.as_ref().map(|id| id.as_str()),
            ));

            if let Some(id) = &view.report_id {
                for format in [ReportFormat::Json, ReportFormat::Pdf] {
                    let url = api.report_url(format, id)?;
                    emit(HeadlessEvent::download_available(
                        format.path_segment(),
                        url.as_str(),
                    ));
                }
            }

            if let Some(path) = &options.html_out {
                std::fs::write(path, render_html(view))?;
                info!("Wrote report fragment to {}", path.display());
            }
            Ok(true)
        }
        ResultPanel::Failed { message } => {
            emit(HeadlessEvent::analysis_failed(message.clone(), failure_status));
            Ok(false)
        }
        other => Err(Error::incomplete_analysis(format!("{:?}", other))),
    }
}

/// Field and checkbox messages that fill the form from `options`
fn form_messages(options: &HeadlessOptions) -> Vec<Message> {
    let mut fields = vec![
        (Field::SourceCode, options.source_code.clone()),
        (Field::ExpectedOutput, options.expected_output.clone()),
    ];
    if options.mode.has_conditions() {
        fields.push((Field::OldCondition, options.old_condition.clone()));
        fields.push((Field::NewCondition, options.new_condition.clone()));
    }

    let mut messages: Vec<Message> = fields
        .into_iter()
        .map(|(field, value)| Message::FieldInput { field, value })
        .collect();
    messages.extend(ConstraintKind::ALL.iter().map(|kind| Message::SetConstraint {
        kind: *kind,
        checked: kind.get(&options.constraints),
    }));
    messages
}
