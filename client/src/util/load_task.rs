//! Reactive driver for [`Loader`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges the plain `Loader` state machine into Leptos: an effect watches
//! the key, spawns the fetch on the browser task queue, and settles the
//! result back into a signal. The generation check inside `Loader::settle`
//! decides whether a finished fetch still matters.

#[cfg(test)]
#[path = "load_task_test.rs"]
mod load_task_test;

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;

use crate::net::api::FetchError;
use crate::state::load::{LoadTicket, Loader};
use crate::util::logger::AppLogger;

/// Drive a loader from a reactive `key`.
///
/// Returns the loader signal and a retry callback that re-issues the
/// current key. `resource` names what is being loaded in log output.
pub fn use_loader<K, T, Fut>(
    resource: &'static str,
    logger: AppLogger,
    key: impl Fn() -> Option<K> + 'static,
    fetch: impl Fn(K) -> Fut + Clone + Send + Sync + 'static,
) -> (RwSignal<Loader<K, T>>, Callback<()>)
where
    K: Clone + PartialEq + Display + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let loader = RwSignal::new(Loader::<K, T>::new());

    let effect_logger = logger.clone();
    let effect_fetch = fetch.clone();
    Effect::new(move || {
        load_key(resource, &effect_logger, loader, key(), effect_fetch.clone());
    });

    let retry = Callback::new(move |()| retry_load(resource, &logger, loader, fetch.clone()));

    (loader, retry)
}

/// Point `loader` at `key` and start a fetch if the key calls for one.
pub fn load_key<K, T, Fut>(
    resource: &'static str,
    logger: &AppLogger,
    loader: RwSignal<Loader<K, T>>,
    key: Option<K>,
    fetch: impl Fn(K) -> Fut + 'static,
) where
    K: Clone + PartialEq + Display + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let mut ticket = None;
    loader.update(|l| ticket = l.set_key(key));
    if let Some(ticket) = ticket {
        spawn_fetch(resource, logger.clone(), loader, ticket, fetch);
    }
}

/// Re-issue the current key, if any.
pub fn retry_load<K, T, Fut>(
    resource: &'static str,
    logger: &AppLogger,
    loader: RwSignal<Loader<K, T>>,
    fetch: impl Fn(K) -> Fut + 'static,
) where
    K: Clone + PartialEq + Display + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let mut ticket = None;
    loader.update(|l| ticket = l.reload());
    if let Some(ticket) = ticket {
        spawn_fetch(resource, logger.clone(), loader, ticket, fetch);
    }
}

fn spawn_fetch<K, T, Fut>(
    resource: &'static str,
    logger: AppLogger,
    loader: RwSignal<Loader<K, T>>,
    ticket: LoadTicket<K>,
    fetch: impl Fn(K) -> Fut + 'static,
) where
    K: Clone + PartialEq + Display + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let LoadTicket { generation, key } = ticket;
    logger.debug(&format!("loading {resource} for {key} (generation {generation})"));

    let pending = fetch(key.clone());
    leptos::task::spawn_local(async move {
        let outcome = pending.await;
        let failure = outcome.as_ref().err().map(ToString::to_string);
        let mut applied = false;
        loader.update(|l| applied = l.settle(generation, outcome));
        match (applied, failure) {
            (true, Some(err)) => logger.error(&format!("error fetching {resource} for {key}: {err}")),
            (true, None) => {}
            (false, _) => {
                logger.debug(&format!("discarded stale {resource} response for {key} (generation {generation})"));
            }
        }
    });
}
