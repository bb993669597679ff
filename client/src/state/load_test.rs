use super::*;

fn loader() -> Loader<String, Vec<&'static str>> {
    Loader::new()
}

fn key(raw: &str) -> Option<String> {
    Some(raw.to_owned())
}

// =============================================================
// Idle / key handling
// =============================================================

#[test]
fn new_loader_is_idle() {
    let loader = loader();
    assert!(loader.state().is_idle());
    assert_eq!(loader.key(), None);
    assert_eq!(loader.generation(), 0);
}

#[test]
fn absent_key_issues_no_ticket_and_stays_idle() {
    let mut loader = loader();
    assert_eq!(loader.set_key(None), None);
    assert!(loader.state().is_idle());
    assert_eq!(loader.generation(), 0);
}

#[test]
fn present_key_issues_ticket_and_enters_loading() {
    let mut loader = loader();
    let ticket = loader.set_key(key("acme")).unwrap();
    assert_eq!(ticket, LoadTicket { generation: 1, key: "acme".to_owned() });
    assert!(loader.state().is_loading());
}

#[test]
fn same_key_twice_issues_one_ticket() {
    let mut loader = loader();
    assert!(loader.set_key(key("acme")).is_some());
    assert!(loader.set_key(key("acme")).is_none());
    assert_eq!(loader.generation(), 1);
}

#[test]
fn clearing_key_returns_to_idle_and_invalidates_in_flight() {
    let mut loader = loader();
    let ticket = loader.set_key(key("acme")).unwrap();
    assert_eq!(loader.set_key(None), None);
    assert!(loader.state().is_idle());

    assert!(!loader.settle(ticket.generation, Ok(vec!["late"])));
    assert!(loader.state().is_idle());
}

// =============================================================
// Settling
// =============================================================

#[test]
fn success_transitions_to_loaded() {
    let mut loader = loader();
    let ticket = loader.set_key(key("acme")).unwrap();
    assert!(loader.settle(ticket.generation, Ok(vec!["c1"])));
    assert_eq!(loader.state(), &LoadState::Loaded(vec!["c1"]));
}

#[test]
fn empty_success_is_loaded_not_error() {
    let mut loader = loader();
    let ticket = loader.set_key(key("acme")).unwrap();
    loader.settle(ticket.generation, Ok(Vec::new()));
    assert_eq!(loader.state().loaded().map(Vec::len), Some(0));
    assert!(loader.state().error().is_none());
}

#[test]
fn non_2xx_transitions_to_error_never_loaded() {
    for status in [301, 400, 401, 403, 404, 429, 500, 503] {
        let mut loader = loader();
        let ticket = loader.set_key(key("acme")).unwrap();
        loader.settle(ticket.generation, Err(FetchError::Status(status)));
        assert_eq!(loader.state().error(), Some(&FetchError::Status(status)));
        assert!(loader.state().loaded().is_none());
    }
}

#[test]
fn second_settle_for_same_ticket_is_ignored() {
    let mut loader = loader();
    let ticket = loader.set_key(key("acme")).unwrap();
    assert!(loader.settle(ticket.generation, Ok(vec!["first"])));
    assert!(!loader.settle(ticket.generation, Err(FetchError::Status(500))));
    assert_eq!(loader.state().loaded(), Some(&vec!["first"]));
}

// =============================================================
// Staleness guard
// =============================================================

#[test]
fn stale_response_after_key_change_is_discarded() {
    let mut loader = loader();
    let a = loader.set_key(key("a")).unwrap();
    let b = loader.set_key(key("b")).unwrap();

    assert!(!loader.settle(a.generation, Ok(vec!["from-a"])));
    assert!(loader.state().is_loading());

    assert!(loader.settle(b.generation, Ok(vec!["from-b"])));
    assert_eq!(loader.state().loaded(), Some(&vec!["from-b"]));
}

#[test]
fn stale_response_after_newer_settles_does_not_overwrite() {
    let mut loader = loader();
    let a = loader.set_key(key("a")).unwrap();
    let b = loader.set_key(key("b")).unwrap();

    assert!(loader.settle(b.generation, Err(FetchError::Status(500))));
    assert!(!loader.settle(a.generation, Ok(vec!["from-a"])));
    assert_eq!(loader.state().error(), Some(&FetchError::Status(500)));
}

#[test]
fn switching_back_to_earlier_key_ignores_its_old_ticket() {
    let mut loader = loader();
    let first_a = loader.set_key(key("a")).unwrap();
    loader.set_key(key("b")).unwrap();
    let second_a = loader.set_key(key("a")).unwrap();

    assert_ne!(first_a.generation, second_a.generation);
    assert!(!loader.settle(first_a.generation, Ok(vec!["old-a"])));
    assert!(loader.settle(second_a.generation, Ok(vec!["new-a"])));
    assert_eq!(loader.state().loaded(), Some(&vec!["new-a"]));
}

// =============================================================
// Reload
// =============================================================

#[test]
fn reload_without_key_is_noop() {
    let mut loader = loader();
    assert_eq!(loader.reload(), None);
    assert!(loader.state().is_idle());
}

#[test]
fn reload_after_error_reissues_current_key() {
    let mut loader = loader();
    let first = loader.set_key(key("acme")).unwrap();
    loader.settle(first.generation, Err(FetchError::Network("offline".to_owned())));

    let retry = loader.reload().unwrap();
    assert_eq!(retry.key, "acme");
    assert!(retry.generation > first.generation);
    assert!(loader.state().is_loading());

    loader.settle(retry.generation, Ok(vec!["c1"]));
    assert_eq!(loader.state().loaded(), Some(&vec!["c1"]));
}

#[test]
fn reload_invalidates_previous_ticket() {
    let mut loader = loader();
    let first = loader.set_key(key("acme")).unwrap();
    let retry = loader.reload().unwrap();
    assert!(!loader.settle(first.generation, Ok(vec!["stale"])));
    assert!(loader.settle(retry.generation, Ok(vec!["fresh"])));
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn fresh_loaders_with_same_input_reach_same_state() {
    let run = || {
        let mut loader = loader();
        let ticket = loader.set_key(key("acme")).unwrap();
        loader.settle(ticket.generation, Ok(vec!["c1", "c2"]));
        loader.state().clone()
    };
    assert_eq!(run(), run());
}
