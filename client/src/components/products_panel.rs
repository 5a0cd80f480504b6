//! Products of the selected company.
//!
//! Changing the company re-fetches with a fresh ticket and clears the old
//! list right away, so products of the previous company are never shown
//! under the new selection. A create that finishes after the selection
//! changed does not re-fetch.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::net::types::{Company, Product};
use crate::services::products::{self, NewProduct};
use crate::state::auth::AuthState;
use crate::state::list::{CreateForm, ListState, Phase};
use crate::util::form::required_text;
use crate::util::i18n;
use crate::util::task::{load_list, refresh_list, reload_list, spawn};

#[component]
pub fn ProductsPanel() -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let options = RwSignal::new(ListState::<Company>::default());
    let list = RwSignal::new(ListState::<Product>::default());
    let selected = RwSignal::new(None::<String>);
    let form = RwSignal::new(CreateForm::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    if let Some(user_id) = auth.with_untracked(|a| a.user_id().map(str::to_owned)) {
        let backend = sessions.backend().clone();
        load_list(options, async move { products::list_company_options(&backend, &user_id).await });
    }

    Effect::new(move || {
        let first = options.with(|l| l.items.first().map(|c| c.id.clone()));
        if selected.get_untracked().is_none() && first.is_some() {
            selected.set(first);
        }
    });

    let fetch_products = Callback::new({
        let sessions = sessions.clone();
        move |(company_id, fresh): (String, bool)| {
            let backend = sessions.backend().clone();
            let parent = company_id.clone();
            let fetch = async move { products::list_products(&backend, &company_id).await };
            if fresh { reload_list(list, &parent, fetch) } else { refresh_list(list, &parent, fetch) }
        }
    });

    Effect::new(move || match selected.get() {
        Some(company_id) => fetch_products.run((company_id, true)),
        None => list.update(ListState::reset),
    });

    let on_submit = Callback::new({
        let sessions = sessions.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(company_id) = selected.get_untracked() else {
                return;
            };
            let Some(product_name) = required_text(&name.get_untracked()) else {
                return;
            };
            if !form.try_update(CreateForm::begin_submit).unwrap_or(false) {
                return;
            }
            let new_product = NewProduct { company_id: company_id.clone(), name: product_name, description: description.get_untracked() };
            let backend = sessions.backend().clone();
            spawn(async move {
                match products::create_product(&backend, &new_product).await {
                    Ok(()) => {
                        form.try_update(CreateForm::submitted);
                        name.try_set(String::new());
                        description.try_set(String::new());
                        fetch_products.run((company_id, false));
                    }
                    Err(e) => {
                        leptos::logging::error!("create product failed: {e}");
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
                    <h2>"Produkter"</h2>
                    <p class="panel__subtitle">"Administrer produkter for testing"</p>
                </div>
                <div class="panel__tools">
                    <select
                        class="field__input"
                        prop:value=move || selected.get().unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            selected.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        {move || {
                            options
                                .get()
                                .items
                                .into_iter()
                                .map(|company| view! { <option value=company.id>{company.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <button
                        class="btn btn--primary"
                        disabled=move || selected.get().is_none()
                        on:click=move |_| form.update(CreateForm::open)
                    >
                        "Nytt produkt"
                    </button>
                </div>
            </header>

            <Show when=move || options.with(|l| l.phase == Phase::Ready && l.items.is_empty())>
                <p class="panel__empty">"Du er ikke medlem av noe selskap ennå."</p>
            </Show>

            <Show when=move || form.with(|f| f.visible)>
                <form class="card form" on:submit=move |ev| on_submit.run(ev)>
                    <label class="field">
                        "Produktnavn"
                        <input
                            class="field__input"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Beskrivelse"
                        <textarea
                            class="field__input"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <div class="form__actions">
                        <button class="btn btn--ghost" type="button" on:click=move |_| form.update(CreateForm::cancel)>
                            "Avbryt"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                            "Opprett produkt"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="form-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show when=move || !list.with(ListState::is_loading) fallback=|| view! { <p>{i18n::LOADING}</p> }>
                <div class="card-grid">
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|product| {
                                let company_name = product.company.as_ref().map(|c| c.name.clone()).unwrap_or_default();
                                view! {
                                    <article class="card">
                                        <h3>{product.name}</h3>
                                        <p class="card__meta">{company_name}</p>
                                        <p>{product.description.unwrap_or_default()}</p>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
