//! Sidebar listing a company's chats.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keyed on the company id from the page URL. Rendering goes through
//! [`list_body`], a pure projection of the loader state, so the component
//! itself only maps rows to markup and relays clicks to the shell.

#[cfg(test)]
#[path = "chat_list_test.rs"]
mod chat_list_test;

use leptos::prelude::*;
use time::UtcOffset;

use crate::components::load_error::{LoadError, error_copy};
use crate::net::api::{ChatSource, HttpChatSource};
use crate::net::types::ChatSummary;
use crate::state::config::ViewerConfig;
use crate::state::load::LoadState;
use crate::util::load_task::use_loader;
use crate::util::logger::AppLogger;
use crate::util::time_format::{Precision, format_timestamp, local_offset};

/// Loader key for the list: the company id, when present.
#[must_use]
pub fn list_key(company_id: &str) -> Option<String> {
    if company_id.is_empty() { None } else { Some(company_id.to_owned()) }
}

/// One rendered list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatListRow {
    /// Emitted to the shell when the row is clicked.
    pub chat_id: String,
    pub label: String,
    /// Contact phone under the label; rich density only, and only when the
    /// label is a display name.
    pub subtitle: Option<String>,
    pub updated: String,
}

/// What the list region shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatListBody {
    /// No company id: neutral hint, not an error.
    Idle(&'static str),
    Loading(&'static str),
    Failed(&'static str),
    Empty(&'static str),
    Rows(Vec<ChatListRow>),
}

/// Project the loader state into the list region, preserving service order.
#[must_use]
pub fn list_body(state: &LoadState<Vec<ChatSummary>>, config: &ViewerConfig, offset: UtcOffset) -> ChatListBody {
    let copy = config.catalog();
    match state {
        LoadState::Idle => ChatListBody::Idle(copy.no_company),
        LoadState::Loading => ChatListBody::Loading(copy.loading_chats),
        LoadState::Error(err) => {
            ChatListBody::Failed(error_copy(err, copy.list_access_blocked, copy.list_generic_error))
        }
        LoadState::Loaded(chats) if chats.is_empty() => ChatListBody::Empty(copy.no_chats),
        LoadState::Loaded(chats) => ChatListBody::Rows(chats.iter().map(|c| list_row(c, config, offset)).collect()),
    }
}

fn list_row(chat: &ChatSummary, config: &ViewerConfig, offset: UtcOffset) -> ChatListRow {
    let label = chat.label().to_owned();
    let subtitle = (config.density.is_rich() && label != chat.contact_phone).then(|| chat.contact_phone.clone());
    ChatListRow {
        chat_id: chat.chat_id.clone(),
        label,
        subtitle,
        updated: format_timestamp(&chat.updated_at, Precision::Minutes, offset),
    }
}

/// Chat list sidebar.
#[component]
pub fn ChatList(
    #[prop(into)] company_id: Signal<String>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let config = expect_context::<Memo<ViewerConfig>>();
    let logger = expect_context::<AppLogger>();
    let source = expect_context::<HttpChatSource>();

    let (loader, retry) = use_loader(
        "chats",
        logger,
        move || list_key(&company_id.get()),
        move |company: String| {
            let source = source.clone();
            async move { source.list_chats(&company).await }
        },
    );

    let body = move || {
        let config = config.get();
        let copy = config.catalog();
        match loader.with(|l| list_body(l.state(), &config, local_offset())) {
            ChatListBody::Idle(text) | ChatListBody::Empty(text) => {
                view! { <p class="chat-list__empty">{text}</p> }.into_any()
            }
            ChatListBody::Loading(text) => view! { <p class="chat-list__loading">{text}</p> }.into_any(),
            ChatListBody::Failed(text) => {
                view! { <LoadError message=text retry_label=copy.retry_label on_retry=retry/> }.into_any()
            }
            ChatListBody::Rows(rows) => view! {
                <ul class="chat-list__items">
                    {rows
                        .into_iter()
                        .map(|row| {
                            let id = row.chat_id.clone();
                            let active_id = row.chat_id.clone();
                            let item_class = move || {
                                if selected.get().as_deref() == Some(active_id.as_str()) {
                                    "chat-list__item chat-list__item--active"
                                } else {
                                    "chat-list__item"
                                }
                            };
                            view! {
                                <li
                                    class=item_class
                                    on:click=move |_| on_select.run(id.clone())
                                >
                                    <h3 class="chat-list__label">{row.label}</h3>
                                    {row.subtitle.map(|phone| view! { <p class="chat-list__phone">{phone}</p> })}
                                    <p class="chat-list__time">{row.updated}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            }
            .into_any(),
        }
    };

    view! {
        <aside class=move || format!("chat-list chat-list--{}", config.get().density)>
            <h2 class="chat-list__heading">{move || config.get().catalog().chats_heading}</h2>
            {body}
        </aside>
    }
}
