//! Shared auth route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated pages apply identical unauthenticated redirect behavior.
//! Redirects run inside effects, so they only fire in the browser after the
//! session has been restored from `localStorage`; SSR never redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::routes::{LOGIN_ROUTE, Navigator};
use crate::state::session::AuthSession;

/// Whether a page guarded by [`install_unauth_redirect`] should leave.
#[must_use]
pub fn should_redirect_unauth(session: &AuthSession) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever the session has no token.
pub fn install_unauth_redirect<N>(session: RwSignal<AuthSession>, navigate: N)
where
    N: Navigator + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate.push(LOGIN_ROUTE);
        }
    });
}

/// Where `/` sends the user: their landing route if signed in, else login.
#[must_use]
pub fn root_redirect_target(session: &AuthSession) -> &'static str {
    if session.is_authenticated() { session.landing_route() } else { LOGIN_ROUTE }
}

/// Navigate from `/` to [`root_redirect_target`] once the session is known.
pub fn install_root_redirect<N>(session: RwSignal<AuthSession>, navigate: N)
where
    N: Navigator + 'static,
{
    Effect::new(move || {
        navigate.push(root_redirect_target(&session.get()));
    });
}
