//! Networking modules for the managed backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the seam every service talks to, `api` implements it over
//! HTTP, `query` renders read filters, and `types` defines the row schema.

pub mod api;
pub mod backend;
pub mod config;
#[cfg(test)]
pub mod fake;
pub mod query;
pub mod types;
