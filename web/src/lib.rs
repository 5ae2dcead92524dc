//! Browser page for the CRONOS analysis console
//!
//! The page is a thin view over the shared controller: every DOM event is
//! turned into a [`Message`], fed to [`update`], and the returned actions
//! (the analyze call, opening a download) are executed here.

pub mod components;
pub mod dom;

use cronos_app::config::Settings;
use cronos_app::message::{AnalysisFailure, Message};
use cronos_app::{update, ApiBase, AppState, UpdateAction};
use cronos_client::HttpAnalyzeClient;
use leptos::prelude::*;
use leptos::task::spawn_local;

use components::form::AnalysisForm;
use components::mode_select::ModeSelect;

/// Handle to the controller state shared by every component
#[derive(Clone, Copy)]
pub struct Controller {
    pub state: RwSignal<AppState>,
}

impl Controller {
    pub fn new(api_base: ApiBase) -> Self {
        Self {
            state: RwSignal::new(AppState::with_settings(Settings::default(), api_base)),
        }
    }

    /// Feed `message` (and any follow-ups) through the controller
    pub fn dispatch(self, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next {
            let Some(result) = self.state.try_update(|state| update(state, msg)) else {
                return;
            };
            if let Some(action) = result.action {
                self.run_action(action);
            }
            next = result.message;
        }
        self.flush_requests();
    }

    fn run_action(self, action: UpdateAction) {
        match action {
            UpdateAction::AnalyzeRequest { seq, request } => {
                let client = self.state.with_untracked(|state| {
                    HttpAnalyzeClient::new(state.api_base.clone(), state.settings.request_timeout())
                });
                spawn_local(async move {
                    let outcome = match client {
                        Ok(client) => client
                            .send_analysis(&request)
                            .await
                            .map_err(AnalysisFailure::from),
                        Err(e) => Err(AnalysisFailure::from(e)),
                    };
                    self.dispatch(Message::AnalysisCompleted { seq, outcome });
                });
            }
            UpdateAction::OpenUrl { url } => dom::open_in_new_tab(&url),
        }
    }

    /// Show a pending alert and perform a pending scroll
    fn flush_requests(self) {
        if self.state.with_untracked(|state| state.alert.is_some()) {
            if let Some(Some(alert)) = self.state.try_update(AppState::take_alert) {
                dom::alert(&alert.message);
            }
        }

        if self.state.with_untracked(|state| state.scroll_request.is_some()) {
            if let Some(Some(target)) = self.state.try_update(AppState::take_scroll_request) {
                // After the DOM reflects the new state
                request_animation_frame(move || dom::scroll_to(target));
            }
        }
    }
}

/// Base URL of the analysis service: the origin that served the page
fn page_base() -> ApiBase {
    match dom::origin().map(|origin| ApiBase::parse(&origin)) {
        Some(Ok(base)) => base,
        _ => {
            log::warn!("Could not determine the page origin, using the default server");
            ApiBase::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctrl = Controller::new(page_base());
    let on_form = move || ctrl.state.with(|state| state.layout().is_some());

    view! {
        <div class="container">
            <header class="header">
                <h1>"CRONOS"</h1>
                <p class="muted">"Dual-mode code analyzer"</p>
            </header>
            <Show when=on_form fallback=move || view! { <ModeSelect ctrl=ctrl /> }>
                <AnalysisForm ctrl=ctrl />
            </Show>
        </div>
    }
}
