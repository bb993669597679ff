use std::cell::RefCell;
use std::rc::Rc;

use any_spawner::Executor;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use leptos::reactive::owner::Owner;
use log::Level;

use super::*;
use crate::state::load::LoadState;
use crate::util::logger::RecordingLogger;

type Outcome = Result<String, FetchError>;

/// Fetches that stay pending until the test resolves them.
#[derive(Clone, Default)]
struct Gate {
    pending: Rc<RefCell<Vec<(String, oneshot::Sender<Outcome>)>>>,
}

impl Gate {
    fn fetch(&self) -> impl Fn(String) -> LocalBoxFuture<'static, Outcome> + 'static {
        let pending = self.pending.clone();
        move |key| {
            let (tx, rx) = oneshot::channel();
            pending.borrow_mut().push((key, tx));
            async move { rx.await.unwrap_or(Err(FetchError::Unavailable)) }.boxed_local()
        }
    }

    fn issued(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Complete the oldest pending fetch for `key` and run spawned tasks.
    fn resolve(&self, key: &str, outcome: Outcome) {
        let tx = {
            let mut pending = self.pending.borrow_mut();
            let idx = pending.iter().position(|(k, _)| k == key).expect("no pending fetch for key");
            pending.remove(idx).1
        };
        let _ = tx.send(outcome);
        Executor::poll_local();
    }
}

fn runtime() -> Owner {
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.set();
    owner
}

fn state_of(loader: RwSignal<Loader<String, String>>) -> LoadState<String> {
    loader.with_untracked(|l| l.state().clone())
}

fn errors(records: &RecordingLogger) -> Vec<String> {
    records.entries().into_iter().filter(|(level, _)| *level == Level::Error).map(|(_, msg)| msg).collect()
}

// =============================================================
// Key changes
// =============================================================

#[test]
fn absent_key_issues_no_fetch() {
    let _owner = runtime();
    let (logger, _records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    load_key("chats", &logger, loader, None, gate.fetch());

    assert_eq!(gate.issued(), 0);
    assert_eq!(state_of(loader), LoadState::Idle);
}

#[test]
fn success_settles_into_loaded() {
    let _owner = runtime();
    let (logger, _records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    load_key("chats", &logger, loader, Some("acme".to_owned()), gate.fetch());
    assert_eq!(state_of(loader), LoadState::Loading);

    gate.resolve("acme", Ok("rows".to_owned()));
    assert_eq!(state_of(loader), LoadState::Loaded("rows".to_owned()));
}

#[test]
fn late_response_for_previous_key_is_discarded() {
    let _owner = runtime();
    let (logger, records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    load_key("chats", &logger, loader, Some("a".to_owned()), gate.fetch());
    load_key("chats", &logger, loader, Some("b".to_owned()), gate.fetch());
    assert_eq!(gate.issued(), 2);

    gate.resolve("b", Ok("from-b".to_owned()));
    gate.resolve("a", Ok("from-a".to_owned()));

    assert_eq!(state_of(loader), LoadState::Loaded("from-b".to_owned()));
    assert!(
        records
            .entries()
            .iter()
            .any(|(level, msg)| *level == Level::Debug && msg.starts_with("discarded stale chats response for a"))
    );
}

// =============================================================
// Failures
// =============================================================

#[test]
fn current_failure_is_logged_as_error() {
    let _owner = runtime();
    let (logger, records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    load_key("chats", &logger, loader, Some("acme".to_owned()), gate.fetch());
    gate.resolve("acme", Err(FetchError::Status(500)));

    assert_eq!(state_of(loader), LoadState::Error(FetchError::Status(500)));
    assert_eq!(errors(&records), ["error fetching chats for acme: HTTP error! status: 500"]);
}

#[test]
fn stale_failure_is_not_logged_as_error() {
    let _owner = runtime();
    let (logger, records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    load_key("chats", &logger, loader, Some("a".to_owned()), gate.fetch());
    load_key("chats", &logger, loader, Some("b".to_owned()), gate.fetch());
    gate.resolve("a", Err(FetchError::Status(500)));

    assert!(errors(&records).is_empty());
    assert_eq!(state_of(loader), LoadState::Loading);

    gate.resolve("b", Ok("from-b".to_owned()));
    assert_eq!(state_of(loader), LoadState::Loaded("from-b".to_owned()));
}

#[test]
fn retry_after_error_reissues_current_key() {
    let _owner = runtime();
    let (logger, _records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    load_key("chats", &logger, loader, Some("acme".to_owned()), gate.fetch());
    gate.resolve("acme", Err(FetchError::Network("offline".to_owned())));
    assert!(state_of(loader).error().is_some());

    retry_load("chats", &logger, loader, gate.fetch());
    assert_eq!(gate.issued(), 1);
    assert_eq!(state_of(loader), LoadState::Loading);

    gate.resolve("acme", Ok("rows".to_owned()));
    assert_eq!(state_of(loader), LoadState::Loaded("rows".to_owned()));
}

#[test]
fn retry_without_key_does_nothing() {
    let _owner = runtime();
    let (logger, _records) = RecordingLogger::shared();
    let gate = Gate::default();
    let loader = RwSignal::new(Loader::<String, String>::new());

    retry_load("chats", &logger, loader, gate.fetch());

    assert_eq!(gate.issued(), 0);
    assert_eq!(state_of(loader), LoadState::Idle);
}
