use serde::{Deserialize, Serialize};

/// Side of an assistant conversation bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Who {
    User,
    Ai,
}

/// One bubble in the assistant thread. In-memory only; the thread is an
/// append-only sequence owned by the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub who: Who,
    pub text: String,
    pub at: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            who: Who::User,
            text: text.into(),
            at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            who: Who::Ai,
            text: text.into(),
            at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
