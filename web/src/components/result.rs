//! Result panel and download controls

use cronos_app::message::Message;
use cronos_app::report::{collapse_label, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};
use cronos_app::{ReportFormat, ReportView, ResultPanel};
use leptos::prelude::*;

use crate::dom::RESULT_ID;
use crate::Controller;

#[component]
pub fn ResultBox(ctrl: Controller) -> impl IntoView {
    let state = ctrl.state;

    let body = move || {
        state.with(|s| match &s.result {
            ResultPanel::Placeholder => view! {
                <div class="placeholder">
                    <h3>{PLACEHOLDER_TITLE}</h3>
                    <p>{PLACEHOLDER_HINT}</p>
                </div>
            }
            .into_any(),
            ResultPanel::Pending => view! {
                <div class="placeholder">
                    <p>"Analyzing..."</p>
                </div>
            }
            .into_any(),
            ResultPanel::Report { view, collapsed } => {
                report(ctrl, view.clone(), *collapsed).into_any()
            }
            ResultPanel::Failed { message } => view! {
                <div class="result-box result-error">
                    <h3>"Analysis failed"</h3>
                    <pre>{message.clone()}</pre>
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <div id=RESULT_ID class="result">
            {body}
            <div class="downloads">
                {[ReportFormat::Json, ReportFormat::Pdf]
                    .into_iter()
                    .map(|format| {
                        let id = match format {
                            ReportFormat::Json => "downloadJsonBtn",
                            ReportFormat::Pdf => "downloadPdfBtn",
                        };
                        view! {
                            <button
                                id=id
                                disabled=move || !state.with(|s| s.downloads_enabled())
                                on:click=move |_| ctrl.dispatch(Message::Download(format))
                            >
                                {format!("Download {}", format.label())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn report(ctrl: Controller, report: ReportView, collapsed: bool) -> impl IntoView {
    let class = format!("result-box {}", report.class.css_class());
    let title = report.title();

    let sections = report
        .sections
        .into_iter()
        .map(|section| {
            let heading = section.heading();
            view! {
                <section class="result-section">
                    <h4>{heading}</h4>
                    <pre>{section.body}</pre>
                </section>
            }
        })
        .collect_view();
    let metadata = report
        .metadata
        .into_iter()
        .map(|(label, value)| view! { <div>{format!("{label}: {value}")}</div> })
        .collect_view();

    view! {
        <div class=class>
            <div class="result-header">
                <h3>{title}</h3>
                <button class="link-button" on:click=move |_| ctrl.dispatch(Message::ToggleCollapse)>
                    {collapse_label(collapsed)}
                </button>
            </div>
            <div id="collapsibleContent" class="collapsible-content" class:collapsed=collapsed>
                <p><strong>"Status: "</strong>{report.status}</p>
                <p><strong>"Risk Score: "</strong>{report.risk_score}</p>
                {sections}
                <section class="result-section">
                    <h4>"Metadata"</h4>
                    {metadata}
                </section>
            </div>
        </div>
    }
}
