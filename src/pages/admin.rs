//! Admin landing page for HR, executive and management users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_bar::AccountBar;
use crate::state::session::AuthSession;
use crate::util::auth::install_unauth_redirect;

/// Company administration. Redirects to `/login` if the user is not
/// authenticated.
#[component]
pub fn AdminCompaniesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    install_unauth_redirect(session, use_navigate());

    let tenant = move || {
        session
            .get()
            .user
            .and_then(|u| u.field_text("tenant_id"))
            .unwrap_or_else(|| "-".to_owned())
    };

    view! {
        <div class="admin-page">
            <AccountBar/>
            <main class="admin-page__body">
                <h1>"Companies"</h1>
                <p class="admin-page__tenant">"Tenant: " {tenant}</p>
            </main>
        </div>
    }
}
