//! Report panel handlers: collapse, scrolling and downloads

use cronos_client::ReportFormat;
use cronos_core::prelude::*;

use crate::state::{Alert, AppState, ResultPanel};

use super::{UpdateAction, UpdateResult};

pub fn handle_toggle_collapse(state: &mut AppState) -> UpdateResult {
    if let ResultPanel::Report { collapsed, .. } = &mut state.result {
        *collapsed = !*collapsed;
        state.report_scroll = 0;
    }
    UpdateResult::none()
}

pub fn handle_scroll_report(state: &mut AppState, delta: i32) -> UpdateResult {
    if state.result.is_report() && !state.is_collapsed() {
        let next = i64::from(state.report_scroll) + i64::from(delta);
        state.report_scroll = next.clamp(0, i64::from(u16::MAX)) as u16;
    }
    UpdateResult::none()
}

/// Open the stored report in `format`
pub fn handle_download(state: &mut AppState, format: ReportFormat) -> UpdateResult {
    let Some(id) = state.last_report_id.as_ref() else {
        state.alert = Some(Alert::no_report());
        return UpdateResult::none();
    };

    match state.api_base.report_url(format, id) {
        Ok(url) => {
            info!("Opening {} report {}", format.label(), id);
            UpdateResult::action(UpdateAction::OpenUrl {
                url: url.to_string(),
            })
        }
        Err(e) => {
            warn!("Cannot build download URL: {}", e);
            state.alert = Some(Alert::new(e.to_string()));
            UpdateResult::none()
        }
    }
}
