//! Authenticated shell: sidebar navigation plus one active view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active view is plain local state. Switching views unmounts the old
//! component, so re-entering a view fetches from scratch. The overview
//! counts are the exception: they are a snapshot taken once when the shell
//! mounts.

use leptos::prelude::*;

use crate::app::Sessions;
use crate::components::companies_panel::CompaniesPanel;
use crate::components::overview_panel::OverviewPanel;
use crate::components::products_panel::ProductsPanel;
use crate::components::testers_panel::TestersPanel;
use crate::components::tests_panel::TestsPanel;
use crate::services::dashboard::{DashboardSummary, load_summary};
use crate::state::auth::AuthState;
use crate::state::ui::ActiveView;
use crate::util::task::spawn;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let sessions = expect_context::<Sessions>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = RwSignal::new(ActiveView::default());
    let summary = RwSignal::new(None::<DashboardSummary>);

    if let Some(user_id) = auth.with_untracked(|a| a.user_id().map(str::to_owned)) {
        let backend = sessions.backend().clone();
        spawn(async move {
            let loaded = load_summary(&backend, &user_id).await.unwrap_or_else(|e| {
                leptos::logging::error!("dashboard summary failed: {e}");
                DashboardSummary::default()
            });
            summary.try_set(Some(loaded));
        });
    }

    let on_sign_out = move |_| {
        let sessions = sessions.clone();
        spawn(async move {
            // The store is cleared either way; the root swaps to sign-in.
            if let Err(e) = sessions.sign_out().await {
                leptos::logging::error!("sign-out failed: {e}");
            }
        });
    };

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <div class="sidebar__brand">"TestLab"</div>
                <nav class="sidebar__nav">
                    {ActiveView::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="sidebar__item"
                                    class=("sidebar__item--active", move || active.get() == item)
                                    on:click=move |_| active.set(item)
                                >
                                    {item.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="sidebar__footer">
                    <span class="sidebar__email">
                        {move || auth.with(|a| a.user_email().unwrap_or_default().to_owned())}
                    </span>
                    <button class="btn btn--ghost" on:click=on_sign_out>
                        "Logg ut"
                    </button>
                </div>
            </aside>
            <main class="dashboard__main">
                {move || match active.get() {
                    ActiveView::Overview => view! { <OverviewPanel summary=summary.read_only()/> }.into_any(),
                    ActiveView::Companies => view! { <CompaniesPanel/> }.into_any(),
                    ActiveView::Products => view! { <ProductsPanel/> }.into_any(),
                    ActiveView::Tests => view! { <TestsPanel/> }.into_any(),
                    ActiveView::Testers => view! { <TestersPanel/> }.into_any(),
                }}
            </main>
        </div>
    }
}
