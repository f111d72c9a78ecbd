//! Route paths and role-based landing selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store decides where a user lands after login; pages and guards
//! redirect through the same constants so paths live in one place.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos_router::NavigateOptions;

pub const LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_ROUTE: &str = "/chat";
pub const ADMIN_ROUTE: &str = "/admin/companies";

/// Roles that land on the admin area after login. Matched exactly.
pub const ADMIN_ROLES: [&str; 3] = ["hr", "executive", "management"];

/// Whether `role` is one of the admin landing roles.
#[must_use]
pub fn is_admin_role(role: Option<&str>) -> bool {
    role.is_some_and(|r| ADMIN_ROLES.contains(&r))
}

/// Route a user with `role` is sent to after a successful login.
#[must_use]
pub fn landing_route(role: Option<&str>) -> &'static str {
    if is_admin_role(role) { ADMIN_ROUTE } else { DEFAULT_ROUTE }
}

/// Client-side navigation target.
///
/// Any `use_navigate()` handle satisfies this through the blanket impl.
pub trait Navigator {
    fn push(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn push(&self, path: &str) {
        self(path, NavigateOptions::default());
    }
}
