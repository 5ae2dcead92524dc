use cronos_app::message::Message;
use cronos_app::panel::mode_card;
use cronos_core::Mode;
use leptos::prelude::*;

use crate::Controller;

#[component]
pub fn ModeSelect(ctrl: Controller) -> impl IntoView {
    view! {
        <section id="modeSelection" class="mode-cards">
            {Mode::ALL
                .into_iter()
                .map(|mode| {
                    let (title, blurb) = mode_card(mode);
                    view! {
                        <button
                            class="mode-card"
                            on:click=move |_| ctrl.dispatch(Message::SelectMode(mode))
                        >
                            <h2>{title}</h2>
                            <p class="muted">{blurb}</p>
                        </button>
                    }
                })
                .collect_view()}
        </section>
    }
}
