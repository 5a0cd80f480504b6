//! Sign-in form with an inline create-account action.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::Sessions;
use crate::util::task::spawn;

/// Which button submitted the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    SignIn,
    SignUp,
}

/// Both fields are required before either action runs.
fn ready_to_submit(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let run = move |action: Action| {
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if !ready_to_submit(&email_value, &password_value) {
            return;
        }
        busy.set(true);
        error.set(None);

        let sessions = sessions.clone();
        spawn(async move {
            let result = match action {
                Action::SignIn => sessions.sign_in(&email_value, &password_value).await,
                Action::SignUp => sessions.sign_up(&email_value, &password_value).await,
            };
            if let Err(e) = result {
                leptos::logging::error!("{action:?} failed: {e}");
                error.try_set(Some(e.user_message()));
            }
            busy.try_set(false);
        });
    };
    let run_sign_up = run.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"TestLab"</h1>
                <p class="login-card__subtitle">"Logg inn for å administrere tester"</p>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        run(Action::SignIn);
                    }
                >
                    <label class="field">
                        "E-post"
                        <input
                            class="field__input"
                            type="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Passord"
                        <input
                            class="field__input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Laster..." } else { "Logg inn" }}
                    </button>
                    <button
                        class="btn btn--ghost"
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| run_sign_up(Action::SignUp)
                    >
                        "Opprett konto"
                    </button>
                </form>
            </div>
        </div>
    }
}
