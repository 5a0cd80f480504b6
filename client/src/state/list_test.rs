use super::*;

// =============================================================
// ListState transitions
// =============================================================

#[test]
fn list_state_default_is_idle_and_empty() {
    let state = ListState::<u32>::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.items.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn begin_then_finish_ok_is_ready() {
    let mut state = ListState::default();
    let ticket = state.begin_load();
    assert!(state.is_loading());
    assert!(state.finish(ticket, Ok(vec![1, 2])));
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.items, vec![1, 2]);
}

#[test]
fn finish_err_keeps_items_and_sets_error() {
    let mut state = ListState::default();
    let t1 = state.begin_load();
    state.finish(t1, Ok(vec![1]));
    let t2 = state.begin_load();
    assert!(state.finish(t2, Err("nede".to_owned())));
    assert_eq!(state.phase, Phase::Error);
    assert_eq!(state.error.as_deref(), Some("nede"));
    assert_eq!(state.items, vec![1]);
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = ListState::<u32>::default();
    let t = state.begin_load();
    state.finish(t, Err("x".to_owned()));
    state.begin_load();
    assert!(state.error.is_none());
}

#[test]
fn stale_ticket_is_discarded() {
    let mut state = ListState::default();
    let old = state.begin_load();
    let new = state.begin_load();
    assert!(!state.finish(old, Ok(vec![9])));
    assert!(state.is_loading());
    assert!(state.items.is_empty());
    assert!(state.finish(new, Ok(vec![1])));
    assert_eq!(state.items, vec![1]);
}

#[test]
fn restart_drops_items_from_previous_parent() {
    let mut state = ListState::default();
    let t = state.begin_load();
    state.finish(t, Ok(vec!["a-product"]));
    let t2 = state.restart();
    assert!(state.items.is_empty());
    assert!(state.is_current(t2));
    assert!(!state.is_current(t));
}

#[test]
fn reset_discards_in_flight_results() {
    let mut state = ListState::default();
    let t = state.begin_load();
    state.reset();
    assert_eq!(state.phase, Phase::Idle);
    assert!(!state.finish(t, Ok(vec![1])));
    assert!(state.items.is_empty());
}

// =============================================================
// Parent-scoped lists
// =============================================================

#[test]
fn refresh_for_current_parent_supersedes_older_fetch() {
    let mut state = ListState::default();
    let t = state.restart_for("company-a");
    state.finish(t, Ok(vec!["a1"]));
    let refetch = state.refresh_for("company-a").unwrap();
    assert!(state.is_loading());
    assert!(state.is_current(refetch));
    assert_eq!(state.items, vec!["a1"]);
}

#[test]
fn refresh_for_previous_parent_leaves_new_selection_alone() {
    let mut state = ListState::default();
    let ta = state.restart_for("company-a");
    state.finish(ta, Ok(vec!["a1"]));

    // User switches to B, then the insert for A completes.
    let tb = state.restart_for("company-b");
    assert_eq!(state.refresh_for("company-a"), None);
    assert!(state.is_current(tb));

    assert!(state.finish(tb, Ok(vec!["b1"])));
    assert_eq!(state.items, vec!["b1"]);
    assert_eq!(state.parent(), Some("company-b"));
}

#[test]
fn reset_forgets_parent() {
    let mut state = ListState::<u32>::default();
    state.restart_for("company-a");
    state.reset();
    assert_eq!(state.parent(), None);
    assert_eq!(state.refresh_for("company-a"), None);
}

// =============================================================
// CreateForm
// =============================================================

#[test]
fn create_form_round_trip() {
    let mut form = CreateForm::default();
    form.open();
    assert!(form.visible);
    assert!(form.begin_submit());
    form.submitted();
    assert!(!form.visible);
    assert!(!form.submitting);
}

#[test]
fn create_form_failure_keeps_form_open() {
    let mut form = CreateForm::default();
    form.open();
    form.begin_submit();
    form.failed("feil".to_owned());
    assert!(form.visible);
    assert_eq!(form.error.as_deref(), Some("feil"));
    assert!(form.begin_submit());
    assert!(form.error.is_none());
}

#[test]
fn create_form_rejects_double_submit() {
    let mut form = CreateForm::default();
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
}

#[test]
fn create_form_cancel_clears_error() {
    let mut form = CreateForm::default();
    form.open();
    form.failed("feil".to_owned());
    form.cancel();
    assert!(!form.visible);
    assert!(form.error.is_none());
}
