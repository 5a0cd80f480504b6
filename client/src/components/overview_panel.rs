//! Overview counts. The snapshot is owned by the dashboard shell.

use leptos::prelude::*;

use crate::services::dashboard::DashboardSummary;
use crate::util::i18n;

#[component]
pub fn OverviewPanel(summary: ReadSignal<Option<DashboardSummary>>) -> impl IntoView {
    let card = move |label: &'static str, pick: fn(&DashboardSummary) -> usize| {
        view! {
            <div class="stat-card">
                <p class="stat-card__label">{label}</p>
                <p class="stat-card__value">
                    {move || summary.get().map_or_else(|| i18n::LOADING.to_owned(), |s| pick(&s).to_string())}
                </p>
            </div>
        }
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2>"Oversikt"</h2>
                <p class="panel__subtitle">"Velkommen til TestLab"</p>
            </header>
            <div class="stat-grid">
                {card("Selskaper", |s| s.companies)}
                {card("Produkter", |s| s.products)}
                {card("Aktive tester", |s| s.active_tests)}
            </div>
        </section>
    }
}
