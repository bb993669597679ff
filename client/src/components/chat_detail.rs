//! Transcript pane for the selected chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keyed on (company id, selected contact). Both must be present before a
//! request goes out; until then the pane shows the "select a chat" prompt.
//! [`detail_body`] projects the loader state into header + bubbles.

#[cfg(test)]
#[path = "chat_detail_test.rs"]
mod chat_detail_test;

use std::fmt;

use leptos::prelude::*;
use time::UtcOffset;

use crate::components::load_error::{LoadError, error_copy};
use crate::components::message_compose::MessageCompose;
use crate::net::api::{ChatSource, HttpChatSource};
use crate::net::types::{ChatTranscript, Message, Role};
use crate::state::config::ViewerConfig;
use crate::state::load::LoadState;
use crate::util::load_task::use_loader;
use crate::util::logger::AppLogger;
use crate::util::time_format::{Precision, format_timestamp, local_offset};

/// Loader key for one transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailKey {
    pub company_id: String,
    pub contact_id: String,
}

impl fmt::Display for DetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.company_id, self.contact_id)
    }
}

/// Both identifiers, or nothing.
#[must_use]
pub fn detail_key(company_id: &str, contact_id: Option<&str>) -> Option<DetailKey> {
    let contact_id = contact_id.filter(|c| !c.is_empty())?;
    if company_id.is_empty() {
        return None;
    }
    Some(DetailKey { company_id: company_id.to_owned(), contact_id: contact_id.to_owned() })
}

/// Horizontal placement of a bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleAlign {
    /// Messages from the contact.
    Right,
    /// Messages from the assistant.
    Left,
}

impl BubbleAlign {
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Human => Self::Right,
            Role::Assistant => Self::Left,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Right => "bubble bubble--right",
            Self::Left => "bubble bubble--left",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBubble {
    pub id: String,
    pub body: String,
    pub align: BubbleAlign,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailHeader {
    /// e.g. "Chat with +1555".
    pub title: String,
    pub company_alias: String,
    pub company_phone: String,
}

/// What the detail pane shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatDetailBody {
    /// Missing company or contact.
    Prompt(&'static str),
    Loading(&'static str),
    Failed(&'static str),
    Loaded { header: DetailHeader, bubbles: Vec<MessageBubble> },
}

/// Bubbles in received order.
#[must_use]
pub fn message_bubbles(messages: &[Message], offset: UtcOffset) -> Vec<MessageBubble> {
    messages
        .iter()
        .map(|m| MessageBubble {
            id: m.message_id.clone(),
            body: m.body.clone(),
            align: BubbleAlign::for_role(m.role),
            timestamp: format_timestamp(&m.date, Precision::Seconds, offset),
        })
        .collect()
}

#[must_use]
pub fn detail_header(transcript: &ChatTranscript, config: &ViewerConfig) -> DetailHeader {
    DetailHeader {
        title: format!("{} {}", config.catalog().chat_with, transcript.contact.label()),
        company_alias: transcript.company_alias.clone(),
        company_phone: transcript.company_phone.clone(),
    }
}

#[must_use]
pub fn detail_body(state: &LoadState<ChatTranscript>, config: &ViewerConfig, offset: UtcOffset) -> ChatDetailBody {
    let copy = config.catalog();
    match state {
        LoadState::Idle => ChatDetailBody::Prompt(copy.select_chat_prompt),
        LoadState::Loading => ChatDetailBody::Loading(copy.loading_detail),
        LoadState::Error(err) => {
            ChatDetailBody::Failed(error_copy(err, copy.detail_access_blocked, copy.detail_generic_error))
        }
        LoadState::Loaded(transcript) => ChatDetailBody::Loaded {
            header: detail_header(transcript, config),
            bubbles: message_bubbles(&transcript.messages, offset),
        },
    }
}

/// Transcript pane with header, bubbles, and the inert compose box.
#[component]
pub fn ChatDetail(
    #[prop(into)] company_id: Signal<String>,
    #[prop(into)] contact_id: Signal<Option<String>>,
) -> impl IntoView {
    let config = expect_context::<Memo<ViewerConfig>>();
    let logger = expect_context::<AppLogger>();
    let source = expect_context::<HttpChatSource>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let (loader, retry) = use_loader(
        "chat details",
        logger,
        move || detail_key(&company_id.get(), contact_id.get().as_deref()),
        move |key: DetailKey| {
            let source = source.clone();
            async move { source.chat_detail(&key.company_id, &key.contact_id).await }
        },
    );

    // Keep the newest message in view after each load.
    Effect::new(move || {
        let _ = loader.with(|l| l.state().loaded().map(|t| t.messages.len()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let body = move || {
        let config = config.get();
        let copy = config.catalog();
        match loader.with(|l| detail_body(l.state(), &config, local_offset())) {
            ChatDetailBody::Prompt(text) => view! {
                <div class="chat-detail__prompt">
                    <p>{text}</p>
                </div>
            }
            .into_any(),
            ChatDetailBody::Loading(text) => view! { <div class="chat-detail__loading">{text}</div> }.into_any(),
            ChatDetailBody::Failed(text) => {
                view! { <LoadError message=text retry_label=copy.retry_label on_retry=retry/> }.into_any()
            }
            ChatDetailBody::Loaded { header, bubbles } => view! {
                <div class="chat-detail__content">
                    <h2 class="chat-detail__title">{header.title}</h2>
                    <div class="chat-detail__card">
                        <div class="chat-detail__company">
                            <p>
                                <strong>{copy.company_label}</strong>
                                " "
                                {header.company_alias}
                            </p>
                            <p>
                                <strong>{copy.company_phone_label}</strong>
                                " "
                                {header.company_phone}
                            </p>
                        </div>
                        <div class="chat-detail__messages" node_ref=messages_ref>
                            {if bubbles.is_empty() {
                                view! { <p class="chat-detail__empty">{copy.no_messages}</p> }.into_any()
                            } else {
                                bubbles
                                    .into_iter()
                                    .map(|bubble| {
                                        view! {
                                            <div class=bubble.align.class() data-message-id=bubble.id>
                                                <p class="bubble__body">{bubble.body}</p>
                                                <p class="bubble__time">{bubble.timestamp}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>
                        <MessageCompose/>
                    </div>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <section class=move || format!("chat-detail chat-detail--{}", config.get().density)>
            {body}
        </section>
    }
}
