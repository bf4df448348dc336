//! Per-view fetch lifecycle: `Loading → Loaded | Failed`, entered once per
//! mount. The three terminal renderings (skeleton, data/empty-state, error)
//! are distinct and never conflated.
//!
//! [`FetchGuard`] closes the stale-response hole: every fetch takes a
//! generation ticket and only the newest may commit, so a response from a
//! superseded request cannot overwrite fresher state.

use crate::api::ApiError;
use crate::session::SessionStore;
use leptos::{RwSignal, SignalSet};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

pub const FETCH_FAILED_MESSAGE: &str =
    "Something went wrong while loading. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }
}

#[derive(Clone, Default)]
pub struct FetchGuard {
    generation: Rc<Cell<u64>>,
}

impl FetchGuard {
    /// Start a new fetch; any ticket issued earlier becomes stale.
    pub fn begin(&self) -> u64 {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        ticket
    }

    pub fn accepts(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

/// Drive `state` through one fetch. Failures log the underlying error to the
/// console and surface a generic message; a 401/403 also expires the session
/// so the route guard bounces to the login page. No automatic retry.
pub fn spawn_fetch<T: 'static>(
    state: RwSignal<Remote<T>>,
    guard: &FetchGuard,
    session: SessionStore,
    what: &'static str,
    fut: impl Future<Output = Result<T, ApiError>> + 'static,
) {
    let ticket = guard.begin();
    let guard = guard.clone();
    spawn_local(async move {
        let result = fut.await;
        if !guard.accepts(ticket) {
            return;
        }
        match result {
            Ok(value) => state.set(Remote::Loaded(value)),
            Err(err) => {
                web_sys::console::error_1(&format!("failed to fetch {what}: {err}").into());
                if err.is_auth() {
                    session.expire();
                }
                state.set(Remote::Failed(FETCH_FAILED_MESSAGE.to_string()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_commits() {
        let guard = FetchGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn clones_share_one_generation_counter() {
        let guard = FetchGuard::default();
        let clone = guard.clone();
        let ticket = guard.begin();
        assert!(clone.accepts(ticket));
        clone.begin();
        assert!(!guard.accepts(ticket));
    }

    #[test]
    fn remote_states_are_distinct() {
        let loading = Remote::<Vec<u8>>::Loading;
        let empty = Remote::Loaded(Vec::<u8>::new());
        let failed = Remote::<Vec<u8>>::Failed("nope".into());
        assert!(loading.is_loading());
        assert_ne!(loading, empty);
        assert_ne!(empty, failed);
    }
}
