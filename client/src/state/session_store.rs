//! Process-wide session store with explicit subscribe/unsubscribe.
//!
//! DESIGN
//! ======
//! The store is the single owner of the current `Session`. Consumers register
//! a callback and hold the returned `Subscription`; the subscription keeps
//! only a weak back reference, so it never extends the store's lifetime, and
//! dropping it releases the callback. Callbacks run outside the lock, so a
//! callback may read the store or unsubscribe without deadlocking.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::types::Session;

type Listener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct Inner {
    session: Option<Session>,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared handle to the session store. Cloning shares the same store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionStore")
            .field("session", &inner.session)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    /// Access token of the current session, if any.
    pub fn access_token(&self) -> Option<String> {
        self.lock().session.as_ref().map(|s| s.access_token.clone())
    }

    /// Replace the session and notify every subscriber once.
    pub fn set(&self, session: Option<Session>) {
        let listeners = {
            let mut inner = self.lock();
            inner.session = session.clone();
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(session.as_ref());
        }
    }

    /// Register `listener`; it is called immediately with the current value
    /// and then after every `set`.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Session>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.session.clone())
        };
        listener(current.as_ref());
        Subscription { store: Arc::downgrade(&self.inner), id: Some(id) }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Handle for one registered listener. Dropping it unsubscribes.
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    store: Weak<Mutex<Inner>>,
    id: Option<u64>,
}

impl Subscription {
    /// Release the listener now. Idempotent.
    pub fn unsubscribe(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.store.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(lid, _)| *lid != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
