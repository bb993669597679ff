//! Message compose box.
//!
//! Presentational only: sending is not supported, so submitting neither
//! calls the service nor touches loader state.

use leptos::prelude::*;

use crate::state::config::ViewerConfig;

/// Text input plus send button; submit is swallowed.
#[component]
pub fn MessageCompose() -> impl IntoView {
    let config = expect_context::<Memo<ViewerConfig>>();
    let draft = RwSignal::new(String::new());

    view! {
        <form class="compose" on:submit=move |ev| ev.prevent_default()>
            <input
                class="compose__input"
                type="text"
                placeholder=move || config.get().catalog().compose_placeholder
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button class="btn btn--primary compose__send" type="submit">
                {move || config.get().catalog().send_label}
            </button>
        </form>
    }
}
