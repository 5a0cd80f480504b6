//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod dates;
pub mod form;
pub mod fragment;
pub mod i18n;
pub mod rating_stats;
pub mod task;
