//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! `root` picks one screen per `RootRoute`; each page owns its orchestration
//! and delegates list views to `components`.

pub mod confirm;
pub mod dashboard;
pub mod login;
pub mod root;
