//! Root application component with routing and context providers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpBackend;
use crate::net::config::{BackendConfig, META_BACKEND_ANON_KEY, META_BACKEND_URL};
use crate::pages::root::RootPage;
use crate::services::session::SessionManager;
use crate::state::auth::AuthState;
use crate::state::session_store::{SessionStore, Subscription};
use crate::util::task::spawn;

/// Session manager shared through context.
pub type Sessions = SessionManager<HttpBackend>;

/// HTML shell rendered on the server for SSR + hydration. The backend
/// location is handed to the browser through `<meta>` tags.
pub fn shell(options: LeptosOptions, backend: BackendConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="nb">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_BACKEND_URL content=backend.url/>
                <meta name=META_BACKEND_ANON_KEY content=backend.anon_key/>
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

/// Root application component.
///
/// Provides the session manager and the auth signal, resolves the initial
/// session, and mirrors every later change into the signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let sessions: Sessions = SessionManager::new(HttpBackend::new(BackendConfig::from_document(), store.clone()), store);
    let auth = RwSignal::new(AuthState::default());

    provide_context(sessions.clone());
    provide_context(auth);

    mirror_session(sessions, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/testlab.css"/>
        <Title text="TestLab"/>

        <Router>
            <Routes fallback=|| "Siden finnes ikke.".into_view()>
                <Route path=StaticSegment("") view=RootPage/>
            </Routes>
        </Router>
    }
}

/// Resolve the initial session, then subscribe once for the lifetime of the
/// app. The subscription is released on cleanup; a lookup that finishes after
/// cleanup never subscribes.
fn mirror_session(sessions: Sessions, auth: RwSignal<AuthState>) {
    let alive = Arc::new(AtomicBool::new(true));
    let slot = Arc::new(Mutex::new(None::<Subscription>));

    let alive_task = Arc::clone(&alive);
    let slot_task = Arc::clone(&slot);
    spawn(async move {
        if let Err(e) = sessions.get_current_session().await {
            leptos::logging::error!("initial session lookup failed: {e}");
        }
        if !alive_task.load(Ordering::Relaxed) {
            return;
        }
        let subscription = sessions.on_session_change(move |session| {
            auth.try_update(|a| a.apply(session));
        });
        *slot_task.lock().unwrap_or_else(PoisonError::into_inner) = Some(subscription);
    });

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    });
}
