//! Companies the user belongs to, plus the roster of the selected company.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::net::types::{Company, CompanyMember};
use crate::services::companies as membership;
use crate::state::auth::AuthState;
use crate::state::list::{CreateForm, ListState};
use crate::util::form::required_text;
use crate::util::i18n;
use crate::util::task::{load_list, refresh_list, reload_list, spawn};

#[component]
pub fn CompaniesPanel() -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_id = auth.with_untracked(|a| a.user_id().map(str::to_owned));

    let companies = RwSignal::new(ListState::<Company>::default());
    let members = RwSignal::new(ListState::<CompanyMember>::default());
    let selected = RwSignal::new(None::<String>);
    let form = RwSignal::new(CreateForm::default());
    let new_name = RwSignal::new(String::new());
    let member_email = RwSignal::new(String::new());
    let member_error = RwSignal::new(None::<String>);
    let member_busy = RwSignal::new(false);

    let fetch_companies = {
        let sessions = sessions.clone();
        let user_id = user_id.clone();
        move || {
            let Some(user_id) = user_id.clone() else {
                return;
            };
            let backend = sessions.backend().clone();
            load_list(companies, async move { membership::list_member_companies(&backend, &user_id).await });
        }
    };
    let fetch_members = {
        let sessions = sessions.clone();
        move |company_id: String, fresh: bool| {
            let backend = sessions.backend().clone();
            let parent = company_id.clone();
            let fetch = async move { membership::list_members(&backend, &company_id).await };
            if fresh { reload_list(members, &parent, fetch) } else { refresh_list(members, &parent, fetch) }
        }
    };

    fetch_companies();

    Effect::new(move || {
        let first = companies.with(|l| l.items.first().map(|c| c.id.clone()));
        if selected.get_untracked().is_none() && first.is_some() {
            selected.set(first);
        }
    });

    let fetch_members_on_select = fetch_members.clone();
    Effect::new(move || {
        if let Some(company_id) = selected.get() {
            member_error.set(None);
            fetch_members_on_select(company_id, true);
        }
    });

    let on_create = Callback::new({
        let sessions = sessions.clone();
        let user_id = user_id.clone();
        let fetch_companies = fetch_companies.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(name) = required_text(&new_name.get_untracked()) else {
                return;
            };
            if !form.try_update(CreateForm::begin_submit).unwrap_or(false) {
                return;
            }
            let backend = sessions.backend().clone();
            let user_id = user_id.clone();
            let fetch_companies = fetch_companies.clone();
            spawn(async move {
                match membership::create_company(&backend, &name, user_id.as_deref()).await {
                    Ok(()) => {
                        form.try_update(CreateForm::submitted);
                        new_name.try_set(String::new());
                        fetch_companies();
                    }
                    Err(e) => {
                        leptos::logging::error!("create company failed: {e}");
                        form.try_update(|f| f.failed(e.user_message()));
                    }
                }
            });
        }
    });

    let on_add_member = Callback::new({
        let sessions = sessions.clone();
        let fetch_members = fetch_members.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(company_id) = selected.get_untracked() else {
                return;
            };
            let Some(email) = required_text(&member_email.get_untracked()) else {
                return;
            };
            if member_busy.get_untracked() {
                return;
            }
            member_busy.set(true);
            member_error.set(None);
            let backend = sessions.backend().clone();
            let fetch_members = fetch_members.clone();
            spawn(async move {
                match membership::add_member(&backend, &company_id, &email).await {
                    Ok(()) => {
                        member_email.try_set(String::new());
                        fetch_members(company_id, false);
                    }
                    Err(e) => {
                        leptos::logging::error!("add member failed: {e}");
                        member_error.try_set(Some(e.user_message()));
                    }
                }
                member_busy.try_set(false);
            });
        }
    });

    let on_remove = Callback::new({
        let sessions = sessions.clone();
        move |member_id: String| {
            let Some(company_id) = selected.get_untracked() else {
                return;
            };
            member_error.set(None);
            let backend = sessions.backend().clone();
            let fetch_members = fetch_members.clone();
            spawn(async move {
                match membership::remove_member(&backend, &member_id).await {
                    Ok(()) => fetch_members(company_id, false),
                    Err(e) => {
                        leptos::logging::error!("remove member failed: {e}");
                        member_error.try_set(Some(e.user_message()));
                    }
                }
            });
        }
    });

    view! {
        <section class="panel">
            <header class="panel__header">
                <div>
                    <h2>"Selskaper"</h2>
                    <p class="panel__subtitle">"Administrer selskaper og medlemmer"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(CreateForm::open)>
                    "Opprett selskap"
                </button>
            </header>

            <Show when=move || form.with(|f| f.visible)>
                <form class="card form" on:submit=move |ev| on_create.run(ev)>
                    <label class="field">
                        "Selskapsnavn"
                        <input
                            class="field__input"
                            required=true
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
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
                            "Opprett"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || companies.with(|l| l.error.is_some())>
                <p class="form-error">{move || companies.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !companies.with(ListState::is_loading) || companies.with(|l| !l.items.is_empty())
                fallback=|| view! { <p>{i18n::LOADING}</p> }
            >
                <div class="split">
                    <ul class="card list">
                        {move || {
                            companies
                                .get()
                                .items
                                .into_iter()
                                .map(|company| {
                                    let id = company.id.clone();
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected.get().as_deref() == Some(id.as_str())
                                    };
                                    view! {
                                        <li
                                            class="list__item list__item--clickable"
                                            class=("list__item--selected", is_selected)
                                            on:click=move |_| selected.set(Some(id.clone()))
                                        >
                                            {company.name}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>

                    <Show when=move || selected.get().is_some()>
                        <div class="card">
                            <h3>"Medlemmer"</h3>
                            <form class="form form--inline" on:submit=move |ev| on_add_member.run(ev)>
                                <input
                                    class="field__input"
                                    type="email"
                                    required=true
                                    placeholder="E-post"
                                    prop:value=move || member_email.get()
                                    on:input=move |ev| member_email.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" type="submit" disabled=move || member_busy.get()>
                                    "Legg til"
                                </button>
                            </form>
                            <Show when=move || member_error.get().is_some()>
                                <p class="form-error">{move || member_error.get().unwrap_or_default()}</p>
                            </Show>
                            <MemberRoster members=members on_remove=on_remove/>
                        </div>
                    </Show>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn MemberRoster(members: RwSignal<ListState<CompanyMember>>, on_remove: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || !members.with(ListState::is_loading)
            fallback=|| view! { <p>{i18n::LOADING}</p> }
        >
            <ul class="list">
                {move || {
                    members
                        .get()
                        .items
                        .into_iter()
                        .map(|member| {
                            let id = member.id.clone();
                            view! {
                                <li class="list__item">
                                    <span>{member.email().to_owned()}</span>
                                    <span class="badge">{member.role.label()}</span>
                                    <button class="btn btn--ghost btn--small" on:click=move |_| on_remove.run(id.clone())>
                                        "Fjern"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
