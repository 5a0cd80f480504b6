//! Share one test with another user by e-mail.
//!
//! Stays open after a successful share so several users can be added in a
//! row; only the close button dismisses it.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::services::sharing::share_test;
use crate::util::form::required_text;
use crate::util::i18n;
use crate::util::task::spawn;

#[component]
pub fn TestShareDialog(test_id: String, on_close: Callback<()>) -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let shared = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = required_text(&email.get_untracked()) else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        shared.set(false);

        let backend = sessions.backend().clone();
        let test_id = test_id.clone();
        spawn(async move {
            match share_test(&backend, &test_id, &target).await {
                Ok(()) => {
                    shared.try_set(true);
                    email.try_set(String::new());
                }
                Err(e) => {
                    leptos::logging::error!("share test failed: {e}");
                    error.try_set(Some(e.user_message()));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="dialog">
            <div class="dialog__header">
                <h3>"Del test"</h3>
                <button class="btn btn--ghost btn--small" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || shared.get()>
                <p class="form-success">{i18n::SHARED_OK}</p>
            </Show>
            <form class="form form--inline" on:submit=on_submit>
                <input
                    class="field__input"
                    type="email"
                    required=true
                    placeholder="E-postadresse"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Del"
                </button>
            </form>
        </div>
    }
}
