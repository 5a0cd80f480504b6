//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `list`, `ui`, `session_store`) so views
//! depend on small focused models that are testable without a browser.

pub mod auth;
pub mod list;
pub mod session_store;
pub mod ui;
