//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The two loaders (`chat_list`, `chat_detail`) read shared config, logger,
//! and chat source from Leptos context and render their lifecycle through
//! pure view-model functions.

pub mod chat_detail;
pub mod chat_list;
pub mod load_error;
pub mod message_compose;
