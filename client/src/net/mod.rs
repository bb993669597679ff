//! Networking modules for the remote chat service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and performs the two read requests, `types`
//! defines the JSON schema those requests return.

pub mod api;
pub mod types;
