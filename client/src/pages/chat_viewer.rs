//! Chat viewer page: list sidebar plus transcript pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the shell. It reads `companyId`, `locale`, and `density` from the
//! URL query and sets the document `lang` from the locale. It owns the
//! selected chat and decides whether the detail pane or the placeholder
//! prompt is visible. A missing company id is logged but
//! never blocks rendering; the loaders simply stay idle.

#[cfg(test)]
#[path = "chat_viewer_test.rs"]
mod chat_viewer_test;

use leptos::prelude::*;
use leptos_meta::Html;
use leptos_router::hooks::use_query_map;

use crate::components::chat_detail::ChatDetail;
use crate::components::chat_list::ChatList;
use crate::state::config::ViewerConfig;
use crate::state::selection::SelectionState;
use crate::util::logger::AppLogger;

/// Query parameter carrying the tenant id.
pub const COMPANY_ID_PARAM: &str = "companyId";

/// Report the company id the page was opened with.
pub fn report_company_id(logger: &AppLogger, company_id: &str) {
    if company_id.is_empty() {
        logger.warn("Company ID is missing from URL parameters");
    } else {
        logger.debug(&format!("companyId {company_id}"));
    }
}

/// Chat viewer route.
#[component]
pub fn ChatViewerPage() -> impl IntoView {
    let query = use_query_map();
    let logger = expect_context::<AppLogger>();

    let company_id = Memo::new(move |_| query.with(|q| q.get(COMPANY_ID_PARAM)).unwrap_or_default());
    let config_logger = logger.clone();
    let config = Memo::new(move |_| {
        query.with(|q| ViewerConfig::resolve(q.get("locale").as_deref(), q.get("density").as_deref(), &config_logger))
    });
    provide_context(config);

    let selection = RwSignal::new(SelectionState::default());

    Effect::new(move |previous: Option<String>| {
        let current = company_id.get();
        report_company_id(&logger, &current);
        // A contact id from another company is meaningless.
        if previous.is_some_and(|p| p != current) {
            selection.update(SelectionState::clear);
        }
        current
    });

    // Only a selection made under the current company is shown.
    let selected = Signal::derive(move || {
        let company = company_id.get();
        selection.with(|s| s.selected_for(&company).map(str::to_owned))
    });
    // The detail pane is keyed on the selection's own company, not the live query.
    let detail_company = Signal::derive(move || selection.with(|s| s.company_id().to_owned()));
    let detail_contact = Signal::derive(move || selection.with(|s| s.selected().map(str::to_owned)));
    let on_select = Callback::new(move |contact_id: String| {
        let company = company_id.get_untracked();
        selection.update(|s| s.select(&company, contact_id));
    });

    view! {
        <div class=move || format!("chat-viewer chat-viewer--{}", config.get().density)>
            <Html {..} lang=move || config.get().locale.as_str()/>
            <ChatList company_id=company_id selected=selected on_select=on_select/>
            <main class="chat-viewer__main">
                <Show
                    when=move || selected.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <div class="chat-viewer__placeholder">
                                <p>{move || config.get().catalog().select_chat_prompt}</p>
                            </div>
                        }
                    }
                >
                    <ChatDetail company_id=detail_company contact_id=detail_contact/>
                </Show>
            </main>
        </div>
    }
}
