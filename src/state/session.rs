//! Auth-session state and the login/logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthSession>` is provided via context by `App`; pages and
//! route guards read it to decide what to render and where to redirect.
//! [`SessionStore`] is the only writer after startup.
//!
//! DESIGN
//! ======
//! The store is generic over its collaborators (API client, persistent
//! storage, router, session holder) so the browser build wires in gloo-net,
//! `localStorage` and `use_navigate()`, while tests use in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Errors propagate to the caller with no rollback. A failed `me` call after a
//! successful login leaves the token in place and no user profile.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, UserProfile};
use crate::routes::{self, LOGIN_ROUTE, Navigator};
use crate::util::storage::{KeyValueStore, StorageError};

/// Storage key holding the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSession {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthSession {
    /// Rebuild the session persisted by a previous login.
    ///
    /// Unreadable entries are treated as absent.
    pub fn restore(storage: &impl KeyValueStore) -> Self {
        let access_token = match storage.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                leptos::logging::warn!("session restore: token unreadable: {e}");
                None
            }
        };
        let user = match storage.get_json::<UserProfile>(USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                leptos::logging::warn!("session restore: user unreadable: {e}");
                None
            }
        };
        Self { access_token, user }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.role.as_deref())
    }

    /// Where this session's user belongs after login.
    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        routes::landing_route(self.role())
    }
}

/// Shared, mutable holder of the current [`AuthSession`].
pub trait SessionHandle {
    /// Snapshot of the current session, without subscribing to changes.
    fn snapshot(&self) -> AuthSession;

    fn update_session(&self, f: impl FnOnce(&mut AuthSession));
}

impl SessionHandle for RwSignal<AuthSession> {
    fn snapshot(&self) -> AuthSession {
        self.get_untracked()
    }

    fn update_session(&self, f: impl FnOnce(&mut AuthSession)) {
        self.update(f);
    }
}

impl SessionHandle for Rc<RefCell<AuthSession>> {
    fn snapshot(&self) -> AuthSession {
        self.borrow().clone()
    }

    fn update_session(&self, f: impl FnOnce(&mut AuthSession)) {
        f(&mut *self.borrow_mut());
    }
}

/// Drives login/logout against the API, storage and router.
#[derive(Clone, Debug)]
pub struct SessionStore<H, A, S, N> {
    session: H,
    api: A,
    storage: S,
    navigator: N,
}

impl<H, A, S, N> SessionStore<H, A, S, N>
where
    H: SessionHandle,
    A: AuthApi,
    S: KeyValueStore,
    N: Navigator,
{
    pub fn new(session: H, api: A, storage: S, navigator: N) -> Self {
        Self { session, api, storage, navigator }
    }

    /// Log in, load the current user, then navigate to their landing route.
    ///
    /// Returns the route navigated to.
    ///
    /// # Errors
    ///
    /// Propagates the first failing API or storage call. Session state is
    /// untouched if the login call itself fails.
    pub async fn login(&self, credentials: &Credentials) -> Result<&'static str, SessionError> {
        let token = self.api.login(credentials).await?.access_token;
        self.session.update_session(|s| s.access_token = Some(token.clone()));
        self.api.set_auth_token(Some(&token));
        self.storage.set(ACCESS_TOKEN_KEY, &token)?;

        let user = self.api.me().await?;
        let route = routes::landing_route(user.role.as_deref());
        leptos::logging::log!("login ok: role={:?} landing={route}", user.role);
        self.session.update_session(|s| s.user = Some(user.clone()));
        self.storage.set_json(USER_KEY, &user)?;

        self.navigator.push(route);
        Ok(route)
    }

    /// Clear the session and return to the login page.
    ///
    /// # Errors
    ///
    /// Returns the first storage error if persisted entries could not be
    /// removed. Both keys are attempted; in-memory state is cleared and
    /// navigation happens regardless.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.session.update_session(|s| {
            s.access_token = None;
            s.user = None;
        });
        self.api.set_auth_token(None);
        let user_removed = self.storage.remove(USER_KEY);
        let token_removed = self.storage.remove(ACCESS_TOKEN_KEY);
        let removed = user_removed.and(token_removed);
        if let Err(e) = &removed {
            leptos::logging::warn!("logout: could not clear storage: {e}");
        }
        self.navigator.push(LOGIN_ROUTE);
        removed.map_err(SessionError::from)
    }
}
