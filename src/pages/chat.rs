//! Default landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_bar::AccountBar;
use crate::state::session::AuthSession;
use crate::util::auth::install_unauth_redirect;

/// Chat workspace. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="chat-page">
            <AccountBar/>
            <main class="chat-page__body">
                <h1>"Chat"</h1>
                <p>"Ask questions about your organisation's documents."</p>
            </main>
        </div>
    }
}
