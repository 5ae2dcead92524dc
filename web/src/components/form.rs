//! Input panels of the analysis form

use cronos_app::message::Message;
use cronos_app::panel::{NEW_CONDITION_BADGE, OLD_CONDITION_BADGE, SOURCE_BADGE};
use cronos_app::{ConstraintKind, Field};
use leptos::prelude::*;

use super::result::ResultBox;
use crate::{dom, Controller};

#[component]
pub fn AnalysisForm(ctrl: Controller) -> impl IntoView {
    let state = ctrl.state;
    let layout = move || state.with(|s| s.layout());
    let show_conditions = move || layout().is_some_and(|l| l.show_conditions);

    let expected_badge = Signal::derive(move || layout().map_or("", |l| l.expected_badge));
    let expected_hint = Signal::derive(move || layout().map_or("", |l| l.expected_hint));
    let constraints_badge = move || layout().map_or("", |l| l.constraints_badge);
    let analyze_label = move || layout().map_or("Analyze", |l| l.analyze_label);

    view! {
        <section id="analysisForm">
            <button
                id="backBtn"
                class="link-button"
                on:click=move |_| ctrl.dispatch(Message::BackToModeSelection)
            >
                "← Back to mode selection"
            </button>
            <div class="form-grid">
                <div class="inputs">
                    <FieldPanel ctrl=ctrl field=Field::SourceCode badge=SOURCE_BADGE />
                    <Show when=show_conditions>
                        <div class="conditions">
                            <FieldPanel ctrl=ctrl field=Field::OldCondition badge=OLD_CONDITION_BADGE />
                            <FieldPanel ctrl=ctrl field=Field::NewCondition badge=NEW_CONDITION_BADGE />
                        </div>
                    </Show>
                    <FieldPanel
                        ctrl=ctrl
                        field=Field::ExpectedOutput
                        badge=expected_badge
                        hint=expected_hint
                    />
                    <div class="panel">
                        <h3>
                            <span class="badge">{constraints_badge}</span>
                            "Constraints"
                        </h3>
                        {ConstraintKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            id=kind.element_id()
                                            prop:checked=move || {
                                                state.with(|s| kind.get(&s.form.constraints))
                                            }
                                            on:change=move |ev| {
                                                ctrl.dispatch(Message::SetConstraint {
                                                    kind,
                                                    checked: event_target_checked(&ev),
                                                })
                                            }
                                        />
                                        {kind.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                        <button
                            id="analyzeBtn"
                            disabled=move || !state.with(|s| s.can_analyze())
                            on:click=move |_| ctrl.dispatch(Message::Analyze)
                        >
                            {analyze_label}
                        </button>
                    </div>
                </div>
                <ResultBox ctrl=ctrl />
            </div>
        </section>
    }
}

/// One labeled text area that grows with its content
#[component]
fn FieldPanel(
    ctrl: Controller,
    field: Field,
    #[prop(into)] badge: Signal<&'static str>,
    #[prop(optional, into)] hint: Option<Signal<&'static str>>,
) -> impl IntoView {
    let state = ctrl.state;
    let textarea = NodeRef::<leptos::html::Textarea>::new();
    let value = Memo::new(move |_| state.with(|s| s.form.field(field).text()));
    let placeholder = move || hint.map_or("", |h| h.get());

    // Runs on mount and whenever the text changes, including the reset
    Effect::new(move || {
        let _ = value.get();
        if let Some(el) = textarea.get() {
            dom::auto_resize(&el);
        }
    });

    view! {
        <div class="panel">
            <label for=field.element_id()>
                <span class="badge">{move || badge.get()}</span>
                {field.label()}
            </label>
            <textarea
                node_ref=textarea
                id=field.element_id()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    ctrl.dispatch(Message::FieldInput {
                        field,
                        value: event_target_value(&ev),
                    })
                }
            />
        </div>
    }
}
