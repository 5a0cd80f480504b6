//! Product tests with inline sharing and results.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::components::test_results_panel::TestResultsPanel;
use crate::components::test_share_dialog::TestShareDialog;
use crate::net::types::{NamedRef, Test};
use crate::services::tests::{self, NewTest};
use crate::state::list::{CreateForm, ListState};
use crate::util::form::required_text;
use crate::util::i18n;
use crate::util::task::{load_list, spawn};

#[component]
pub fn TestsPanel() -> impl IntoView {
    let sessions = expect_context::<Sessions>();

    let list = RwSignal::new(ListState::<Test>::default());
    let products = RwSignal::new(ListState::<NamedRef>::default());
    let form = RwSignal::new(CreateForm::default());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_private = RwSignal::new(false);
    let product_id = RwSignal::new(String::new());
    let sharing = RwSignal::new(None::<String>);
    let showing_results = RwSignal::new(None::<String>);

    let fetch_tests = Callback::new({
        let sessions = sessions.clone();
        move |()| {
            let backend = sessions.backend().clone();
            load_list(list, async move { tests::list_tests(&backend).await });
        }
    });

    fetch_tests.run(());
    {
        let backend = sessions.backend().clone();
        load_list(products, async move { tests::list_product_options(&backend).await });
    }

    Effect::new(move || {
        let first = products.with(|l| l.items.first().map(|p| p.id.clone()));
        if product_id.get_untracked().is_empty() {
            if let Some(first) = first {
                product_id.set(first);
            }
        }
    });

    let on_submit = Callback::new({
        let sessions = sessions.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(test_title) = required_text(&title.get_untracked()) else {
                return;
            };
            let parent = product_id.get_untracked();
            if parent.is_empty() || !form.try_update(CreateForm::begin_submit).unwrap_or(false) {
                return;
            }
            let new_test = NewTest {
                product_id: parent,
                title: test_title,
                description: description.get_untracked(),
                is_private: is_private.get_untracked(),
            };
            let backend = sessions.backend().clone();
            spawn(async move {
                match tests::create_test(&backend, &new_test).await {
                    Ok(()) => {
                        form.try_update(CreateForm::submitted);
                        title.try_set(String::new());
                        description.try_set(String::new());
                        is_private.try_set(false);
                        fetch_tests.run(());
                    }
                    Err(e) => {
                        leptos::logging::error!("create test failed: {e}");
                        form.try_update(|f| f.failed(e.user_message()));
                    }
                }
            });
        }
    });

    let toggle = |slot: RwSignal<Option<String>>, id: String| {
        slot.update(|current| {
            *current = if current.as_deref() == Some(id.as_str()) { None } else { Some(id) };
        });
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <div>
                    <h2>"Tester"</h2>
                    <p class="panel__subtitle">"Administrer produkttester"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(CreateForm::open)>
                    "Opprett ny test"
                </button>
            </header>

            <Show when=move || form.with(|f| f.visible)>
                <form class="card form" on:submit=move |ev| on_submit.run(ev)>
                    <label class="field">
                        "Testnavn"
                        <input
                            class="field__input"
                            required=true
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
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
                    <label class="field">
                        "Produkt"
                        <select
                            class="field__input"
                            required=true
                            prop:value=move || product_id.get()
                            on:change=move |ev| product_id.set(event_target_value(&ev))
                        >
                            {move || {
                                products
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|p| view! { <option value=p.id>{p.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || is_private.get()
                            on:change=move |ev| is_private.set(event_target_checked(&ev))
                        />
                        "Privat test"
                    </label>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <div class="form__actions">
                        <button class="btn btn--ghost" type="button" on:click=move |_| form.update(CreateForm::cancel)>
                            "Avbryt"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                            "Opprett test"
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
                <div class="stack">
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|test| {
                                let share_id = test.id.clone();
                                let results_id = test.id.clone();
                                let shown_share = test.id.clone();
                                let shown_results = test.id.clone();
                                let dialog_id = test.id.clone();
                                let results_panel_id = test.id.clone();
                                let product_name = test.product.map(|p| p.name).unwrap_or_default();
                                view! {
                                    <article class="card">
                                        <div class="card__row">
                                            <div>
                                                <h3>{test.title}</h3>
                                                <p class="card__meta">{product_name}</p>
                                                <p>{test.description.unwrap_or_default()}</p>
                                            </div>
                                            <div class="card__actions">
                                                {test.is_private.then(|| view! { <span class="badge">"Privat"</span> })}
                                                <button class="btn btn--ghost btn--small" on:click=move |_| toggle(sharing, share_id.clone())>
                                                    "Del"
                                                </button>
                                                <button class="btn btn--ghost btn--small" on:click=move |_| toggle(showing_results, results_id.clone())>
                                                    "Resultater"
                                                </button>
                                            </div>
                                        </div>
                                        <Show when=move || sharing.get().as_deref() == Some(shown_share.as_str())>
                                            <TestShareDialog
                                                test_id=dialog_id.clone()
                                                on_close=Callback::new(move |()| sharing.set(None))
                                            />
                                        </Show>
                                        <Show when=move || showing_results.get().as_deref() == Some(shown_results.as_str())>
                                            <TestResultsPanel test_id=results_panel_id.clone()/>
                                        </Show>
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
