//! Fire-and-forget async work on the browser event loop.
//!
//! DESIGN
//! ======
//! List fetches go through `load_list`/`reload_list` so every result is
//! applied against the `FetchTicket` taken when the fetch started. A result
//! for a superseded ticket, or one that lands after the owning view was
//! unmounted, is dropped.

use std::future::Future;

use leptos::prelude::*;

use crate::net::backend::BackendError;
use crate::state::list::{FetchTicket, ListState};

/// Run `fut` on the UI event loop. Server-side rendering never drives client
/// tasks, so the future is dropped there.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Re-fetch `list`, keeping the current items visible until the result lands.
pub fn load_list<T, F>(list: RwSignal<ListState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, BackendError>> + 'static,
{
    if let Some(ticket) = list.try_update(ListState::begin_load) {
        track(list, ticket, fetch);
    }
}

/// Fetch the list belonging to `parent`: the previous items are discarded
/// immediately.
pub fn reload_list<T, F>(list: RwSignal<ListState<T>>, parent: &str, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, BackendError>> + 'static,
{
    if let Some(ticket) = list.try_update(|l| l.restart_for(parent)) {
        track(list, ticket, fetch);
    }
}

/// Re-fetch after a mutation under `parent`. Nothing is fetched when the list
/// already shows another parent.
pub fn refresh_list<T, F>(list: RwSignal<ListState<T>>, parent: &str, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, BackendError>> + 'static,
{
    match list.try_update(|l| l.refresh_for(parent)).flatten() {
        Some(ticket) => track(list, ticket, fetch),
        None => leptos::logging::log!("skipped refresh for deselected parent {parent}"),
    }
}

fn track<T, F>(list: RwSignal<ListState<T>>, ticket: FetchTicket, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, BackendError>> + 'static,
{
    spawn(async move {
        let result = fetch.await.map_err(|e| {
            leptos::logging::error!("list fetch failed: {e}");
            e.user_message()
        });
        let applied = list.try_update(|l| l.finish(ticket, result)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarded stale list result");
        }
    });
}
