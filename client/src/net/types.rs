//! Wire DTOs returned by the remote chat service.
//!
//! DESIGN
//! ======
//! Field names follow the service's camelCase JSON. Optional and
//! bookkeeping fields default when absent so a partially populated
//! transcript still renders instead of failing to decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One entry of the `/chats/list` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    /// Service-assigned chat identifier.
    pub chat_id: String,
    /// Phone number of the contact on the other side of the chat.
    pub contact_phone: String,
    /// Contact name, when the service knows one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Last activity timestamp (ISO-8601).
    pub updated_at: String,
}

impl ChatSummary {
    /// Label shown in the list: the display name, or the phone when no name is known.
    #[must_use]
    pub fn label(&self) -> &str {
        non_blank(self.display_name.as_deref()).unwrap_or(&self.contact_phone)
    }
}

/// Counterpart of a chat as embedded in a transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub display_name: Option<String>,
    pub phone: String,
}

impl Contact {
    #[must_use]
    pub fn label(&self) -> &str {
        non_blank(self.display_name.as_deref()).unwrap_or(&self.phone)
    }
}

/// Author side of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Written by the contact.
    Human,
    /// Written by the company's assistant.
    Assistant,
}

/// A single message inside a transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique within its transcript.
    pub message_id: String,
    pub role: Role,
    pub body: String,
    /// Epoch timestamp as sent by the service.
    #[serde(default)]
    pub timestamp: f64,
    /// ISO-8601 timestamp used for display.
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Always null in practice; kept so the shape round-trips.
    #[serde(default)]
    pub ack: Option<serde_json::Value>,
}

/// Full chat detail returned by `/chats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTranscript {
    pub company_id: String,
    pub company_alias: String,
    pub company_phone: String,
    pub chat_id: String,
    pub contact: Contact,
    /// Messages in service order. Never re-sorted client-side.
    #[serde(default)]
    pub messages: Vec<Message>,
    pub created_at: String,
    pub updated_at: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
