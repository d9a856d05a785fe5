//! Concurrency behavior of the shared container
//!
//! The mutex serializes `store` and `consume` per instance, so however many
//! threads race on a consume, exactly one of them gets the secret.

use std::sync::Arc;
use std::thread;

use readonce_core::SharedSecretContainer;

#[test]
fn racing_consumers_get_exactly_one_secret() {
    let shared = Arc::new(SharedSecretContainer::new());
    shared.store("hunter2").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.consume().is_ok())
        })
        .collect();

    let successes =
        handles.into_iter().map(|h| h.join().unwrap_or(false)).filter(|ok| *ok).count();

    assert_eq!(successes, 1, "exactly one thread may receive the secret");
    assert!(!shared.is_present());
}

#[test]
fn store_after_racing_consume_is_refused() {
    let shared = Arc::new(SharedSecretContainer::new());
    shared.store("first").unwrap();

    let consumer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || shared.consume())
    };
    assert!(consumer.join().unwrap_or_else(|_| unreachable!("consumer panicked")).is_ok());

    // The container is terminal across threads, not per handle
    assert!(shared.store("second").is_err());
}

#[test]
fn racing_stores_leave_one_retrievable_secret() {
    let shared = Arc::new(SharedSecretContainer::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.store(format!("secret-{i}")))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap_or_else(|_| unreachable!("writer panicked")).is_ok());
    }

    let secret = shared.consume().unwrap();
    let text = secret.as_str().unwrap_or_default();
    assert!(text.starts_with("secret-"), "consumed value must be one of the stored secrets");
    assert!(shared.consume().is_err());
}
