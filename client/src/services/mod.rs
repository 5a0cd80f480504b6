//! Client-side orchestration over the backend seam.
//!
//! ARCHITECTURE
//! ============
//! Service modules own query shapes and domain conditions so pages and
//! components can stay focused on rendering and signal plumbing. Every
//! function is generic over `Backend` and is tested against the in-memory
//! fake.

pub mod companies;
pub mod confirmation;
pub mod dashboard;
pub mod products;
pub mod results;
pub mod session;
pub mod sharing;
pub mod testers;
pub mod tests;
