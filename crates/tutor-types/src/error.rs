use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TutorError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Auth(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for TutorError {
    fn from(e: serde_json::Error) -> Self {
        TutorError::Serialization(e.to_string())
    }
}
