//! HTTP access to the remote chat service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent cross-origin
//! with browser credentials.
//! Server-side (SSR): every call resolves to [`FetchError::Unavailable`];
//! loaders only fetch from effects, which never run during SSR.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures all surface as [`FetchError`].
//! The UI only distinguishes two categories ([`ErrorKind`]): access blocked
//! by the browser's cross-origin policy, and everything else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;
use url::Url;

use super::types::{ChatSummary, ChatTranscript};

/// Production chat service host.
pub const DEFAULT_API_BASE_URL: &str = "https://companychats-production.up.railway.app";

/// Base URL baked in at build time via `CHAT_API_BASE_URL`, else the production host.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("CHAT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Failure of a single chat-service request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The browser refused the cross-origin request.
    #[error("access blocked: {0}")]
    AccessBlocked(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The configured base URL cannot be turned into an endpoint.
    #[error("invalid endpoint base: {0}")]
    Endpoint(String),

    /// HTTP is only available in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// User-facing failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Cross-origin access failure; the user should contact support.
    AccessBlocked,
    /// Anything else; the user should try again later.
    Generic,
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AccessBlocked(_) => ErrorKind::AccessBlocked,
            _ => ErrorKind::Generic,
        }
    }
}

/// Map a JS exception raised by `fetch` to a [`FetchError`].
///
/// Browsers report blocked cross-origin requests as a `TypeError`; only
/// those mentioning CORS are treated as access failures.
#[must_use]
pub fn classify_js_error(name: &str, message: &str) -> FetchError {
    if name == "TypeError" && message.contains("CORS") {
        FetchError::AccessBlocked(message.to_owned())
    } else {
        FetchError::Network(format!("{name}: {message}"))
    }
}

/// Accept 2xx statuses only.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for any status outside `200..300`.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(FetchError::Status(status)) }
}

/// `GET {base}/chats/list?companyId=…`
///
/// # Errors
///
/// Returns [`FetchError::Endpoint`] if `base` is not an absolute hierarchical URL.
pub fn chat_list_endpoint(base: &str, company_id: &str) -> Result<String, FetchError> {
    endpoint(base, &["chats", "list"], &[("companyId", company_id)])
}

/// `GET {base}/chats?companyId=…&contactPhone=…`
///
/// # Errors
///
/// Returns [`FetchError::Endpoint`] if `base` is not an absolute hierarchical URL.
pub fn chat_detail_endpoint(base: &str, company_id: &str, contact_id: &str) -> Result<String, FetchError> {
    endpoint(base, &["chats"], &[("companyId", company_id), ("contactPhone", contact_id)])
}

fn endpoint(base: &str, segments: &[&str], query: &[(&str, &str)]) -> Result<String, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::Endpoint(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| FetchError::Endpoint(base.to_owned()))?
        .pop_if_empty()
        .extend(segments);
    url.query_pairs_mut().extend_pairs(query);
    Ok(url.into())
}

/// Read access to chats, abstracted so loaders can be driven without a browser.
pub trait ChatSource {
    /// Chats of `company_id`, in service order.
    fn list_chats(&self, company_id: &str) -> impl Future<Output = Result<Vec<ChatSummary>, FetchError>>;

    /// Transcript of the chat between `company_id` and `contact_id`.
    fn chat_detail(&self, company_id: &str, contact_id: &str) -> impl Future<Output = Result<ChatTranscript, FetchError>>;
}

/// [`ChatSource`] backed by the remote HTTP service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpChatSource {
    base_url: String,
}

impl HttpChatSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpChatSource {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl ChatSource for HttpChatSource {
    async fn list_chats(&self, company_id: &str) -> Result<Vec<ChatSummary>, FetchError> {
        let url = chat_list_endpoint(&self.base_url, company_id)?;
        get_json(&url).await
    }

    async fn chat_detail(&self, company_id: &str, contact_id: &str) -> Result<ChatTranscript, FetchError> {
        let url = chat_detail_endpoint(&self.base_url, company_id, contact_id)?;
        get_json(&url).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .mode(web_sys::RequestMode::Cors)
            .credentials(web_sys::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp.status())?;
        resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(FetchError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::JsError(js) => classify_js_error(&js.name, &js.message),
        gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
        gloo_net::Error::GlooError(msg) => FetchError::Network(msg),
    }
}
