//! Concurrent access to the session registry.

mod common;
use common::*;

use std::sync::{Arc, Barrier};

use oxide_idl_session::prelude::*;

const THREADS: usize = 16;

#[test]
fn concurrent_first_access_creates_one_session() {
    let registry = SessionRegistry::new();
    let factory = CountingFactory::default();
    registry.register_dialect("sqlite", factory.clone()).unwrap();

    let shared = url("sqlite://shared.db");
    let barrier = Barrier::new(THREADS);
    let sessions: Vec<Arc<DialectSession>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let source = Arc::clone(&shared);
                let (registry, barrier) = (&registry, &barrier);
                scope.spawn(move || {
                    barrier.wait();
                    registry.session_for("sqlite", source).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(factory.calls(), 1);
    assert_eq!(registry.len(), 1);
    assert!(sessions.iter().all(|s| Arc::ptr_eq(s, &sessions[0])));
}

#[test]
fn concurrent_access_to_distinct_keys() {
    let registry = SessionRegistry::new();
    let factory = CountingFactory::default();
    registry.register_dialect("sqlite", factory.clone()).unwrap();

    let sources: Vec<_> = (0..4).map(|i| url(&format!("sqlite://db{i}.db"))).collect();
    std::thread::scope(|scope| {
        for i in 0..THREADS {
            let registry = &registry;
            let source = Arc::clone(&sources[i % sources.len()]);
            scope.spawn(move || {
                registry.session_for("sqlite", source).unwrap();
            });
        }
    });

    assert_eq!(factory.calls(), 4);
    assert_eq!(registry.len(), 4);
}

#[test]
fn unknown_dialect_never_invokes_a_factory() {
    let registry = SessionRegistry::empty();
    let factory = CountingFactory::default();
    registry.register_dialect("sqlite", factory.clone()).unwrap();

    let err = registry
        .session_for("not-a-real-dialect", url("sqlite://x.db"))
        .unwrap_err();

    assert!(matches!(err, SessionError::UnsupportedDialect { .. }));
    assert_eq!(err.to_string(), "unsupported dialect 'not-a-real-dialect'");
    assert_eq!(factory.calls(), 0);
    assert!(registry.is_empty());
}

#[test]
fn failing_factory_leaves_no_entry() {
    let registry = SessionRegistry::new();
    registry
        .register_dialect("broken", |ctx: SessionContext| -> Result<DialectSession> {
            Err(SessionError::Construction {
                dialect_id: ctx.dialect_id,
                message: String::from("driver missing"),
            })
        })
        .unwrap();

    let err = registry.session_for("broken", url("x://y")).unwrap_err();
    assert!(matches!(err, SessionError::Construction { .. }));
    assert!(registry.is_empty());
}
