use serde::{Deserialize, Serialize};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the grading backend, including the `/api` prefix.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(option_env!("TUTOR_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}
