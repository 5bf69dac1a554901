//! # State Store
//!
//! [`Store`] owns the session's [`ClientState`] and is the only place it changes.
//! Every change goes through [`Store::dispatch`], which runs the pure reducer over the
//! current snapshot and publishes the result.
//!
//! The state sits in a `tokio::sync::watch` channel: readers take cheap snapshots, and a
//! presentation layer can `subscribe()` to be woken on every dispatch. Handles are
//! `Clone` and all share the same state.

use crate::state::{reduce, Action, ClientState};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<ClientState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ClientState::default())
    }
}

impl Store {
    pub fn new(initial: ClientState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn dispatch(&self, action: Action) {
        tracing::trace!(action = action.kind(), "dispatch");
        self.tx.send_modify(|state| *state = reduce(state, action));
    }

    pub fn snapshot(&self) -> ClientState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.tx.subscribe()
    }
}
