//! Error region shared by both loaders.

#[cfg(test)]
#[path = "load_error_test.rs"]
mod load_error_test;

use leptos::prelude::*;

use crate::net::api::{ErrorKind, FetchError};

/// Pick the user-facing message for `err`.
#[must_use]
pub fn error_copy(err: &FetchError, access_blocked: &'static str, generic: &'static str) -> &'static str {
    match err.kind() {
        ErrorKind::AccessBlocked => access_blocked,
        ErrorKind::Generic => generic,
    }
}

/// Inline error message with a manual retry button.
#[component]
pub fn LoadError(message: &'static str, retry_label: &'static str, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <p class="load-error__message">{message}</p>
            <button class="btn load-error__retry" on:click=move |_| on_retry.run(())>
                {retry_label}
            </button>
        </div>
    }
}
