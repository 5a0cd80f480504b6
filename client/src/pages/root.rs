//! Root controller: confirmation page, loading, dashboard or sign-in.

use leptos::prelude::*;

use crate::pages::confirm::ConfirmationPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::ui::RootRoute;
use crate::util::fragment::has_token_marker;
use crate::util::i18n;

#[component]
pub fn RootPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    // The fragment never reaches the server, so it is read once after
    // hydration. SSR and the first client render agree on `Loading`.
    let fragment = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
            fragment.set(hash);
        }
    });

    let route = Memo::new(move |_| RootRoute::decide(fragment.with(|h| has_token_marker(h)), &auth.get()));

    move || match route.get() {
        RootRoute::Confirmation => view! { <ConfirmationPage fragment=fragment.get_untracked()/> }.into_any(),
        RootRoute::Loading => view! { <div class="page page--center"><p>{i18n::LOADING}</p></div> }.into_any(),
        RootRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        RootRoute::SignIn => view! { <LoginPage/> }.into_any(),
    }
}
