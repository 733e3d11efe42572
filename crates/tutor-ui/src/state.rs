//! View-local state: input buffers and panel visibility.
//!
//! Everything that belongs to the session or the workspace lives in
//! tutor-core and is read as snapshots; this is only what the widgets
//! themselves need between frames.

use tutor_types::exercise::Difficulty;

/// State visible to UI panels
pub struct UiState {
    /// Assistant input field content
    pub chat_input: String,
    /// Whether the exercise picker is open
    pub show_catalog: bool,
    /// Client-side difficulty filter for the picker
    pub catalog_difficulty: Option<Difficulty>,
    /// Login/signup form
    pub auth: AuthForm,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            chat_input: String::new(),
            show_catalog: false,
            catalog_difficulty: None,
            auth: AuthForm::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which auth tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn label(&self) -> &str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn submit_label(&self) -> &str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Create Account",
        }
    }
}

/// The login/signup form fields and feedback
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            username: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    /// Clear feedback when the user switches tabs or edits a field.
    pub fn clear_feedback(&mut self) {
        self.error = None;
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}
