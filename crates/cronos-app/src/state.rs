//! Application state (Model in TEA pattern)

use cronos_client::ApiBase;
use cronos_core::{AnalysisResult, Mode, ReportId};

use crate::config::Settings;
use crate::form::FormState;
use crate::panel::PanelLayout;
use crate::report::ReportView;

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The two mode cards
    #[default]
    ModeSelection,
    /// The input panels and result panel for the selected mode
    Form,
}

/// Contents of the result panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultPanel {
    /// Nothing analyzed yet
    #[default]
    Placeholder,
    /// Waiting for the analysis service
    Pending,
    /// A rendered report
    Report { view: ReportView, collapsed: bool },
    /// The last submission failed
    Failed { message: String },
}

impl ResultPanel {
    pub fn is_report(&self) -> bool {
        matches!(self, ResultPanel::Report { .. })
    }
}

/// Blocking notice shown to the user (browser `alert()`, TUI modal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Analyze was requested before choosing a mode
    pub fn mode_not_selected() -> Self {
        Self::new("Select a mode first")
    }

    /// A download was requested before any successful analysis
    pub fn no_report() -> Self {
        Self::new("Run analysis first")
    }
}

/// Where the host should scroll after the next render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Report,
}

/// Complete controller state
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,

    /// Selected workflow; `None` until a mode card is chosen
    pub mode: Option<Mode>,

    /// Card highlighted on the selection screen (terminal host)
    pub highlighted_mode: Mode,

    pub form: FormState,

    pub result: ResultPanel,

    /// Last successful response, until the next success or a reset
    pub last_result: Option<AnalysisResult>,

    /// Report id of the last successful response; enables downloads
    pub last_report_id: Option<ReportId>,

    /// Sequence number of the submission awaiting a response
    pub in_flight: Option<u64>,

    next_seq: u64,

    pub alert: Option<Alert>,

    /// One-shot scroll request consumed by the host
    pub scroll_request: Option<ScrollTarget>,

    /// First visible line of the report body (terminal host)
    pub report_scroll: u16,

    /// Animation frame counter for the pending spinner
    pub tick: u64,

    /// Service the analyze call and downloads resolve against
    pub api_base: ApiBase,

    pub settings: Settings,

    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), ApiBase::default())
    }

    pub fn with_settings(settings: Settings, api_base: ApiBase) -> Self {
        Self {
            screen: Screen::default(),
            mode: None,
            highlighted_mode: Mode::Compliance,
            form: FormState::default(),
            result: ResultPanel::default(),
            last_result: None,
            last_report_id: None,
            in_flight: None,
            next_seq: 0,
            alert: None,
            scroll_request: None,
            report_scroll: 0,
            tick: 0,
            api_base,
            settings,
            should_quit: false,
        }
    }

    /// Layout of the input panels, `None` on the selection screen
    pub fn layout(&self) -> Option<PanelLayout> {
        self.mode.map(PanelLayout::for_mode)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the analyze trigger should be enabled
    pub fn can_analyze(&self) -> bool {
        self.mode.is_some() && !self.is_submitting()
    }

    /// Whether the two download triggers should be enabled
    pub fn downloads_enabled(&self) -> bool {
        self.last_report_id.is_some()
    }

    /// Whether the report body is collapsed (false when no report is shown)
    pub fn is_collapsed(&self) -> bool {
        matches!(self.result, ResultPanel::Report { collapsed: true, .. })
    }

    /// Take the pending scroll request, leaving none
    pub fn take_scroll_request(&mut self) -> Option<ScrollTarget> {
        self.scroll_request.take()
    }

    /// Take the pending alert, leaving none
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Allocate the next submission sequence number
    pub(crate) fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::ModeSelection);
        assert!(state.mode.is_none());
        assert!(state.layout().is_none());
        assert_eq!(state.result, ResultPanel::Placeholder);
        assert!(!state.can_analyze());
        assert!(!state.downloads_enabled());
        assert!(!state.is_collapsed());
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut state = AppState::new();
        let first = state.next_seq();
        let second = state.next_seq();
        assert!(second > first);
    }

    #[test]
    fn test_take_scroll_request_is_one_shot() {
        let mut state = AppState::new();
        state.scroll_request = Some(ScrollTarget::Top);
        assert_eq!(state.take_scroll_request(), Some(ScrollTarget::Top));
        assert_eq!(state.take_scroll_request(), None);
    }
}
