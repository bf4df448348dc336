//! The session store: the single owner of the authenticated identity.
//!
//! `Session` is a two-state machine, `Anonymous` or `Authenticated`. All
//! transitions go through [`SessionStore`]; no view constructs or mutates an
//! identity directly. Login failure leaves the state untouched, and profile
//! updates replace the identity wholesale with the server-confirmed value.

use crate::api::{self, ApiError};
use crate::nav::Nav;
use crate::routes;
use crate::storage;
use leptos::{create_rw_signal, RwSignal, SignalGet, SignalGetUntracked, SignalSet};
use portal_types::{Identity, Role};

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(identity) => Some(identity),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(Session::Anonymous),
        }
    }

    /// Start from whatever the last page load left in localStorage.
    pub fn restore() -> Self {
        let store = Self::new();
        if let Some((_, identity)) = storage::load_session() {
            store.state.set(Session::Authenticated(identity));
        }
        store
    }

    /// Reactive read; re-runs reactive consumers on every transition.
    pub fn session(&self) -> Session {
        self.state.get()
    }

    /// Synchronous read of the latest completed transition.
    pub fn current(&self) -> Session {
        self.state.get_untracked()
    }

    /// Exchange credentials for a session. On failure nothing changes and
    /// the error is returned for the caller to display.
    pub async fn login(self, email: String, password: String) -> Result<Identity, ApiError> {
        let response = api::auth::login(&email, &password).await?;
        self.adopt(&response.token, response.user.clone());
        Ok(response.user)
    }

    /// Commit a successful login: persist the token and flip to
    /// `Authenticated` in one step, so there is no partially logged-in state.
    pub fn adopt(&self, token: &str, identity: Identity) {
        storage::save_session(token, &identity);
        self.state.set(Session::Authenticated(identity));
    }

    /// Replace the identity with the server-confirmed profile. Never called
    /// optimistically; the caller must hold the backend's response.
    pub fn update_identity(&self, identity: Identity) {
        if self.current().is_authenticated() {
            storage::save_identity(&identity);
            self.state.set(Session::Authenticated(identity));
        }
    }

    pub fn logout(self, nav: Nav) {
        self.expire();
        nav.go(routes::LOGIN_PATH);
    }

    /// Drop the session without navigating. Used when a backend call reports
    /// an authentication failure; the route guard then bounces to login.
    pub fn expire(&self) {
        storage::clear_session();
        self.state.set(Session::Anonymous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(first_name: &str, role: Role) -> Identity {
        Identity {
            id: 1,
            email: "asha@example.in".into(),
            first_name: first_name.into(),
            last_name: "Patil".into(),
            role,
            ..Identity::default()
        }
    }

    #[test]
    fn default_store_starts_anonymous() {
        let runtime = leptos::create_runtime();
        let store = SessionStore::default();
        assert_eq!(store.current(), Session::Anonymous);
        runtime.dispose();
    }

    #[test]
    fn adopt_transitions_anonymous_to_authenticated() {
        let runtime = leptos::create_runtime();
        let store = SessionStore::new();
        assert_eq!(store.current(), Session::Anonymous);

        store.adopt("tok-1", identity("Asha", Role::Citizen));
        assert!(store.current().is_authenticated());
        assert_eq!(store.current().role(), Some(Role::Citizen));
        runtime.dispose();
    }

    #[test]
    fn update_identity_replaces_wholesale() {
        let runtime = leptos::create_runtime();
        let store = SessionStore::new();
        let mut original = identity("Asha", Role::Citizen);
        original.phone_number = Some("9876543210".into());
        store.adopt("tok-1", original);

        // The replacement has no phone number; the old value must not leak
        // through a field-by-field merge.
        store.update_identity(identity("Asha", Role::Citizen));
        let current = store.current();
        let identity = current.identity().expect("authenticated");
        assert!(identity.phone_number.is_none());
        runtime.dispose();
    }

    #[test]
    fn update_identity_is_ignored_while_anonymous() {
        let runtime = leptos::create_runtime();
        let store = SessionStore::new();
        store.update_identity(identity("Asha", Role::Citizen));
        assert_eq!(store.current(), Session::Anonymous);
        runtime.dispose();
    }

    #[test]
    fn logout_clears_the_session_and_targets_login() {
        let runtime = leptos::create_runtime();
        let store = SessionStore::new();
        store.adopt("tok-1", identity("Asha", Role::Admin));

        let nav = Nav::new();
        store.logout(nav);
        assert_eq!(store.current(), Session::Anonymous);
        assert_eq!(nav.path_untracked(), routes::LOGIN_PATH);
        runtime.dispose();
    }

    #[test]
    fn expire_drops_the_identity_without_navigating() {
        let runtime = leptos::create_runtime();
        let store = SessionStore::new();
        store.adopt("tok-1", identity("Asha", Role::Citizen));
        store.expire();
        assert_eq!(store.current(), Session::Anonymous);
        runtime.dispose();
    }
}
