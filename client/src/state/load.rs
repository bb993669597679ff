//! Fetch lifecycle shared by the chat list and chat detail loaders.
//!
//! DESIGN
//! ======
//! A [`Loader`] tracks the key it is currently showing and a generation
//! counter. Every key change (and every explicit reload) bumps the
//! generation and hands out a [`LoadTicket`] stamped with it. A response is
//! applied only when its ticket's generation is still current, so a slow
//! response for an old key can never overwrite the state of a newer one.
//!
//! The state itself is a [`LoadState`] sum type: a loader is idle, loading,
//! failed, or loaded, never more than one of those at a time.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::net::api::FetchError;

/// Observable lifecycle of one loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// No key; nothing is requested or shown.
    #[default]
    Idle,
    /// A request for the current key is in flight.
    Loading,
    /// The request for the current key failed.
    Error(FetchError),
    /// The request for the current key succeeded.
    Loaded(T),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Permission to issue one request for `key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket<K> {
    pub generation: u64,
    pub key: K,
}

/// Key-tracking state machine with a staleness guard.
#[derive(Clone, Debug, PartialEq)]
pub struct Loader<K, T> {
    key: Option<K>,
    generation: u64,
    state: LoadState<T>,
}

impl<K, T> Default for Loader<K, T> {
    fn default() -> Self {
        Self { key: None, generation: 0, state: LoadState::Idle }
    }
}

impl<K: Clone + PartialEq, T> Loader<K, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Point the loader at `key`.
    ///
    /// Returns a ticket when a request must be issued. Re-submitting the key
    /// already being tracked is a no-op. An absent key resets to
    /// [`LoadState::Idle`] and still invalidates whatever was in flight.
    pub fn set_key(&mut self, key: Option<K>) -> Option<LoadTicket<K>> {
        if key.is_some() && key == self.key {
            return None;
        }
        if key.is_none() && self.key.is_none() {
            return None;
        }
        self.key = key;
        self.begin()
    }

    /// Re-issue the request for the current key, if any.
    pub fn reload(&mut self) -> Option<LoadTicket<K>> {
        self.key.as_ref()?;
        self.begin()
    }

    /// Apply the outcome of the request issued under `generation`.
    ///
    /// Returns `false` (and leaves state untouched) when the ticket is stale
    /// or its request was already settled.
    pub fn settle(&mut self, generation: u64, outcome: Result<T, FetchError>) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            return false;
        }
        self.state = match outcome {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Error(err),
        };
        true
    }

    fn begin(&mut self) -> Option<LoadTicket<K>> {
        self.generation += 1;
        match &self.key {
            None => {
                self.state = LoadState::Idle;
                None
            }
            Some(key) => {
                self.state = LoadState::Loading;
                Some(LoadTicket { generation: self.generation, key: key.clone() })
            }
        }
    }
}
