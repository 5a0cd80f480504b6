//! Fetch/mutate state machine shared by every list view.
//!
//! DESIGN
//! ======
//! A list moves through `Idle -> Loading -> Ready | Error`. Every fetch is
//! tagged with a `FetchTicket`; starting a new fetch supersedes older tickets,
//! and results carrying a superseded ticket are dropped. A successful mutation
//! re-enters `Loading` with a fresh ticket: the list is re-fetched instead of
//! patched locally.
//!
//! Lists that belong to a selected parent (the products of a company, the
//! roster of a company) remember that parent. A refresh requested for any
//! other parent is refused, so a mutation that completes after the user moved
//! on can never supersede the fetch for the current selection.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Identifies one in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub phase: Phase,
    pub items: Vec<T>,
    pub error: Option<String>,
    generation: u64,
    parent: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { phase: Phase::Idle, items: Vec::new(), error: None, generation: 0, parent: None }
    }
}

impl<T> ListState<T> {
    /// Enter `Loading` and supersede any in-flight fetch.
    pub fn begin_load(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.error = None;
        FetchTicket(self.generation)
    }

    /// Like `begin_load`, but also drops the current items so a list for a
    /// different parent is never shown while the new one loads.
    pub fn restart(&mut self) -> FetchTicket {
        self.items.clear();
        self.begin_load()
    }

    /// Switch to `parent` and fetch its list from empty.
    pub fn restart_for(&mut self, parent: &str) -> FetchTicket {
        self.parent = Some(parent.to_owned());
        self.restart()
    }

    /// Re-fetch after a mutation under `parent`. `None` when the list has
    /// moved to another parent since; the current fetch stays authoritative.
    pub fn refresh_for(&mut self, parent: &str) -> Option<FetchTicket> {
        if self.parent.as_deref() != Some(parent) {
            return None;
        }
        Some(self.begin_load())
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Apply a fetch result. Returns `false` and changes nothing when the
    /// ticket has been superseded.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = Phase::Ready;
                self.error = None;
            }
            Err(message) => {
                self.phase = Phase::Error;
                self.error = Some(message);
            }
        }
        true
    }

    /// Back to `Idle` with no items; in-flight results are discarded.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.parent = None;
        self.items.clear();
        self.error = None;
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

/// Visibility and inline error for a creation form.
///
/// Field values live in their own signals; this tracks the submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub visible: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CreateForm {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn cancel(&mut self) {
        self.visible = false;
        self.error = None;
    }

    /// Start an attempt: the previous error is cleared. Returns `false` when
    /// an attempt is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// The insert succeeded: hide the form. Callers clear their fields.
    pub fn submitted(&mut self) {
        self.submitting = false;
        self.visible = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}
