//! Test participants.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::net::types::Tester;
use crate::services::testers::{self, NewTester};
use crate::state::list::{CreateForm, ListState};
use crate::util::form::required_text;
use crate::util::i18n;
use crate::util::task::{load_list, spawn};

#[component]
pub fn TestersPanel() -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let list = RwSignal::new(ListState::<Tester>::default());
    let form = RwSignal::new(CreateForm::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let fetch = Callback::new({
        let sessions = sessions.clone();
        move |()| {
            let backend = sessions.backend().clone();
            load_list(list, async move { testers::list_testers(&backend).await });
        }
    });
    fetch.run(());

    let on_submit = Callback::new({
        let sessions = sessions.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let (Some(tester_name), Some(tester_email)) =
                (required_text(&name.get_untracked()), required_text(&email.get_untracked()))
            else {
                return;
            };
            if !form.try_update(CreateForm::begin_submit).unwrap_or(false) {
                return;
            }
            let tester = NewTester { name: tester_name, email: tester_email, phone: phone.get_untracked() };
            let backend = sessions.backend().clone();
            spawn(async move {
                match testers::create_tester(&backend, &tester).await {
                    Ok(()) => {
                        form.try_update(CreateForm::submitted);
                        name.try_set(String::new());
                        email.try_set(String::new());
                        phone.try_set(String::new());
                        fetch.run(());
                    }
                    Err(e) => {
                        leptos::logging::error!("create tester failed: {e}");
                        form.try_update(|f| f.failed(e.user_message()));
                    }
                }
            });
        }
    });

    view! {
        <section class="panel">
            <header class="panel__header">
                <div>
                    <h2>"Deltakere"</h2>
                    <p class="panel__subtitle">"Administrer testdeltakere"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(CreateForm::open)>
                    "Legg til deltaker"
                </button>
            </header>

            <Show when=move || form.with(|f| f.visible)>
                <form class="card form" on:submit=move |ev| on_submit.run(ev)>
                    <label class="field">
                        "Navn"
                        <input
                            class="field__input"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Telefon"
                        <input
                            class="field__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <div class="form__actions">
                        <button class="btn btn--ghost" type="button" on:click=move |_| form.update(CreateForm::cancel)>
                            "Avbryt"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                            "Legg til"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="form-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !list.with(ListState::is_loading) || list.with(|l| !l.items.is_empty())
                fallback=|| view! { <p>{i18n::LOADING}</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Navn"</th>
                            <th>"E-post"</th>
                            <th>"Telefon"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|tester| {
                                    view! {
                                        <tr>
                                            <td>{tester.name}</td>
                                            <td>{tester.email}</td>
                                            <td>{tester.phone.unwrap_or_else(|| "-".to_owned())}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
