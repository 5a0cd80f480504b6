//! Terminal page for the e-mail confirmation redirect.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::services::confirmation::{CallbackOutcome, confirmation_outcome};
use crate::util::i18n;
use crate::util::task::spawn;

#[component]
pub fn ConfirmationPage(fragment: String) -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let outcome = RwSignal::new(None::<CallbackOutcome>);

    spawn(async move {
        let result = confirmation_outcome(&fragment, &sessions).await;
        outcome.try_set(Some(result));
    });

    let go_home = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"E-postbekreftelse"</h1>
                <p class="login-message">
                    {move || outcome.get().map_or(i18n::CONFIRM_PENDING, CallbackOutcome::message)}
                </p>
                <button class="btn btn--primary" on:click=go_home>
                    "Gå til innlogging"
                </button>
            </div>
        </div>
    }
}
