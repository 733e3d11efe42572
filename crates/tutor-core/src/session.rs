//! Process-wide authentication state, reconciled with the backend's
//! session mechanism.

use std::cell::RefCell;
use std::rc::Rc;

use tutor_types::session::{AuthStatus, Credentials, Session};
use tutor_types::Result;

use crate::ports::BackendPort;

/// The single source of truth for "who is logged in".
///
/// Clone-cheap via Rc (single-threaded WASM); consumers read snapshots and
/// never mutate the state directly. The composition root calls `refresh()`
/// exactly once at startup.
#[derive(Clone)]
pub struct SessionManager {
    state: Rc<RefCell<Session>>,
    backend: Rc<dyn BackendPort>,
}

impl SessionManager {
    pub fn new(backend: Rc<dyn BackendPort>) -> Self {
        Self {
            state: Rc::new(RefCell::new(Session::new())),
            backend,
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Reconcile with `GET /auth/me/`.
    ///
    /// Fail-closed: transport failure, a non-success status, or an
    /// uninterpretable body all collapse to "not authenticated". No error
    /// reaches the caller; callers observe only the resulting state.
    /// `is_loading` is true for the duration and false once settled,
    /// whatever the outcome.
    pub async fn refresh(&self) {
        self.state.borrow_mut().is_loading = true;

        let status = match self.backend.me().await {
            Ok(body) => AuthStatus::from_body(&body),
            Err(e) => {
                log::debug!("session refresh failed: {}", e);
                AuthStatus::Unauthenticated
            }
        };

        let mut state = self.state.borrow_mut();
        match status {
            AuthStatus::Authenticated { username } => {
                state.is_authenticated = true;
                state.username = username;
            }
            AuthStatus::Unauthenticated => {
                state.is_authenticated = false;
                state.username = None;
            }
        }
        state.is_loading = false;
    }

    /// Local-only override used right after a login/logout round trip, so
    /// the UI reflects the new state without waiting for a second one.
    pub fn set_auth(&self, is_authenticated: bool, username: Option<String>) {
        let mut state = self.state.borrow_mut();
        state.is_authenticated = is_authenticated;
        state.username = if is_authenticated { username } else { None };
    }

    /// Errors are returned for the auth view to display; the session is
    /// left untouched on failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let username = self.backend.login(credentials).await?;
        self.set_auth(true, Some(username));
        Ok(())
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<()> {
        let username = self.backend.signup(credentials).await?;
        self.set_auth(true, Some(username));
        Ok(())
    }

    /// Best-effort: the local session is cleared whatever the backend says.
    pub async fn logout(&self) {
        if let Err(e) = self.backend.logout().await {
            log::debug!("logout request failed: {}", e);
        }
        self.set_auth(false, None);
    }
}
