//! Gate for authenticated-only views.
//!
//! Derived entirely from a session snapshot; holds no state of its own.

use tutor_types::session::Session;

/// What the caller should render for a protected location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session state is still being resolved; show a neutral placeholder.
    Loading,
    /// Not signed in; go to the auth view, remembering where the user was
    /// headed so they can be returned there after login.
    RedirectToLogin { from: String },
    /// Signed in; render the protected content unchanged.
    Allow,
}

pub fn decide(session: &Session, requested: &str) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Loading;
    }
    if !session.is_authenticated {
        return RouteDecision::RedirectToLogin {
            from: requested.to_string(),
        };
    }
    RouteDecision::Allow
}
