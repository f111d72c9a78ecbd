//! Header strip showing the signed-in user with a logout button.

use leptos::prelude::*;

use crate::app::use_session_store;
use crate::state::session::AuthSession;

#[component]
pub fn AccountBar() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let store = use_session_store();

    let name = move || {
        session
            .get()
            .user
            .map_or_else(|| "Account".to_owned(), |u| u.display_name())
    };
    let role = move || session.get().role().map(str::to_owned).unwrap_or_default();

    let on_logout = move |_| {
        if let Err(e) = store.logout() {
            leptos::logging::warn!("logout: {e}");
        }
    };

    view! {
        <header class="account-bar">
            <span class="account-bar__name">{name}</span>
            <span class="account-bar__role">{role}</span>
            <button class="account-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
