//! Results and rating statistics for one test.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::net::types::TestResult;
use crate::services::results::{list_results, stats_for};
use crate::state::list::ListState;
use crate::util::dates::format_long_date_nb;
use crate::util::i18n;
use crate::util::rating_stats::star_glyphs;
use crate::util::task::load_list;

#[component]
pub fn TestResultsPanel(test_id: String) -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let list = RwSignal::new(ListState::<TestResult>::default());

    let backend = sessions.backend().clone();
    load_list(list, async move { list_results(&backend, &test_id).await });

    let stats = Memo::new(move |_| list.with(|l| stats_for(&l.items)));

    view! {
        <div class="results">
            <Show when=move || !list.with(ListState::is_loading) fallback=|| view! { <p>{i18n::LOADING_RESULTS}</p> }>
                <Show when=move || list.with(|l| l.error.is_some())>
                    <p class="form-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="results__summary">
                    <div class="stat-card">
                        <p class="stat-card__label">"Gjennomsnitt"</p>
                        <p class="stat-card__value">{move || stats.with(|s| s.average_label())}</p>
                    </div>
                    <div class="stat-card">
                        <p class="stat-card__label">"Antall svar"</p>
                        <p class="stat-card__value">{move || stats.with(|s| s.total)}</p>
                    </div>
                </div>
                <ul class="results__distribution">
                    {move || {
                        stats
                            .get()
                            .distribution
                            .into_iter()
                            .map(|bucket| {
                                view! {
                                    <li class="bar">
                                        <span class="bar__label">{format!("{} ★", bucket.stars)}</span>
                                        <span class="bar__track">
                                            <span class="bar__fill" style=format!("width: {}%", bucket.percent)></span>
                                        </span>
                                        <span class="bar__value">{format!("{}%", bucket.percent)}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show
                    when=move || list.with(|l| !l.items.is_empty())
                    fallback=|| view! { <p class="panel__empty">{i18n::NO_RESULTS}</p> }
                >
                    <ul class="list">
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|result| {
                                    view! {
                                        <li class="list__item list__item--stacked">
                                            <div class="card__row">
                                                <span>{result.tester.name}" ("{result.tester.email}")"</span>
                                                <span class="stars">{star_glyphs(result.rating)}</span>
                                            </div>
                                            <p>{result.feedback.unwrap_or_default()}</p>
                                            <p class="card__meta">{format_long_date_nb(&result.created_at)}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
