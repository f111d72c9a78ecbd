//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::api::{AuthApi, HttpApi};
use crate::pages::{admin::AdminCompaniesPage, chat::ChatPage, login::LoginPage};
use crate::routes::Navigator;
use crate::state::session::{AuthSession, SessionStore};
use crate::util::auth::install_root_redirect;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Session store wired to the browser collaborators provided by [`App`].
///
/// Must be called inside the router so `use_navigate` has a router context.
pub fn use_session_store()
-> SessionStore<RwSignal<AuthSession>, HttpApi, LocalStorage, impl Navigator + Clone + 'static> {
    let session = expect_context::<RwSignal<AuthSession>>();
    let api = expect_context::<HttpApi>();
    SessionStore::new(session, api, LocalStorage, use_navigate())
}

/// Root application component.
///
/// Restores the persisted session, re-applies its token to the API client,
/// and provides both as context before setting up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let restored = if cfg!(feature = "hydrate") {
        AuthSession::restore(&LocalStorage)
    } else {
        AuthSession::default()
    };
    let api = HttpApi::default();
    if let Some(token) = restored.access_token.as_deref() {
        api.set_auth_token(Some(token));
    }

    provide_context(RwSignal::new(restored));
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("companies")) view=AdminCompaniesPage/>
            </Routes>
        </Router>
    }
}

/// `/` sends signed-in users to their landing route and everyone else to login.
///
/// Renders nothing; navigation happens client-side once hydration has the
/// restored session.
#[component]
fn RootRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    install_root_redirect(session, use_navigate());
}
