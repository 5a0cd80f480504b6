//! Local navigation state: which top-level screen and which dashboard view.
//!
//! DESIGN
//! ======
//! Navigation is plain UI state, not routes. Leaving a view drops it; coming
//! back mounts it fresh and it fetches again.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::auth::AuthState;

/// Dashboard views reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Overview,
    Companies,
    Products,
    Tests,
    Testers,
}

impl ActiveView {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Companies, Self::Products, Self::Tests, Self::Testers];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Oversikt",
            Self::Companies => "Selskaper",
            Self::Products => "Produkter",
            Self::Tests => "Tester",
            Self::Testers => "Deltakere",
        }
    }
}

/// Top-level screen chosen by the root controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootRoute {
    /// E-mail confirmation redirect; terminal page.
    Confirmation,
    Loading,
    Dashboard,
    SignIn,
}

impl RootRoute {
    /// A confirmation fragment wins over everything; otherwise wait for the
    /// first session lookup, then show the dashboard or the sign-in form.
    pub fn decide(is_confirmation: bool, auth: &AuthState) -> Self {
        if is_confirmation {
            Self::Confirmation
        } else if auth.loading {
            Self::Loading
        } else if auth.session.is_some() {
            Self::Dashboard
        } else {
            Self::SignIn
        }
    }
}
