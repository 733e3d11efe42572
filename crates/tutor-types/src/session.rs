use serde::Serialize;
use serde_json::Value;

/// Authenticated identity state of the current user, reconciled with the
/// remote session store. Never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub username: Option<String>,
}

impl Session {
    /// Starts loading; the first reconcile settles it.
    pub fn new() -> Self {
        Self {
            is_loading: true,
            is_authenticated: false,
            username: None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed interpretation of the `/auth/me/` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated { username: Option<String> },
    Unauthenticated,
}

impl AuthStatus {
    /// The backend contract is loosely typed: some deployments return an
    /// explicit `authenticated` flag, others only a `username` field.
    /// When the flag is present it wins outright; a stray username next to
    /// `authenticated: false` is ignored. Without the flag, a non-empty
    /// username implies a live session.
    pub fn from_body(body: &Value) -> Self {
        if let Some(flag) = body.get("authenticated").and_then(Value::as_bool) {
            if flag {
                return AuthStatus::Authenticated {
                    username: non_empty_str(body.get("username")),
                };
            }
            return AuthStatus::Unauthenticated;
        }

        match non_empty_str(body.get("username")) {
            Some(username) => AuthStatus::Authenticated {
                username: Some(username),
            },
            None => AuthStatus::Unauthenticated,
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Login/signup request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
