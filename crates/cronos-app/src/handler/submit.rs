//! Analyze submission and completion

use cronos_core::prelude::*;
use cronos_core::AnalysisResult;

use crate::message::AnalysisFailure;
use crate::report::ReportView;
use crate::state::{Alert, AppState, ResultPanel, ScrollTarget};

use super::{UpdateAction, UpdateResult};

/// Build a request from the form and hand it to the host
///
/// Without a mode the user is alerted and nothing is sent. While a request
/// is in flight further submissions are ignored.
pub fn handle_analyze(state: &mut AppState) -> UpdateResult {
    let Some(mode) = state.mode else {
        state.alert = Some(Alert::mode_not_selected());
        return UpdateResult::none();
    };

    if let Some(seq) = state.in_flight {
        debug!("Analyze ignored: request #{} still in flight", seq);
        return UpdateResult::none();
    }

    let request = state.form.build_request(mode);
    let seq = state.next_seq();
    state.in_flight = Some(seq);
    state.result = ResultPanel::Pending;
    state.tick = 0;
    info!("Submitting analysis #{} (mode={})", seq, mode);

    UpdateResult::action(UpdateAction::AnalyzeRequest { seq, request })
}

/// Apply the outcome of submission `seq`
///
/// Completions for anything but the request in flight are stale (the user
/// went back, or a newer request superseded it) and are dropped.
pub fn handle_analysis_completed(
    state: &mut AppState,
    seq: u64,
    outcome: std::result::Result<AnalysisResult, AnalysisFailure>,
) -> UpdateResult {
    if state.in_flight != Some(seq) {
        debug!(
            "Discarding stale analysis #{} (in flight: {:?})",
            seq, state.in_flight
        );
        return UpdateResult::none();
    }
    state.in_flight = None;

    // Mode is always set while a request is in flight; back navigation
    // clears both together
    let Some(mode) = state.mode else {
        return UpdateResult::none();
    };

    match outcome {
        Ok(result) => {
            let view = ReportView::build(&result, mode);
            state.last_report_id = view.report_id.clone();
            state.last_result = Some(result);
            state.result = ResultPanel::Report {
                view,
                collapsed: false,
            };
            state.report_scroll = 0;
            state.scroll_request = Some(ScrollTarget::Report);
        }
        Err(failure) => {
            warn!("Analysis #{} failed: {}", seq, failure.message);
            state.last_result = None;
            state.last_report_id = None;
            state.result = ResultPanel::Failed {
                message: failure.message,
            };
            state.scroll_request = Some(ScrollTarget::Report);
        }
    }

    UpdateResult::none()
}
