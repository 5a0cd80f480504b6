//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One panel per dashboard view, plus the test-level share dialog and
//! results panel. Panels read the session manager and auth signal from
//! context and keep their list state local, so unmounting a panel drops it.

pub mod companies_panel;
pub mod overview_panel;
pub mod products_panel;
pub mod test_results_panel;
pub mod test_share_dialog;
pub mod testers_panel;
pub mod tests_panel;
