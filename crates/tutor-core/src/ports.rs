//! Port trait — the hexagonal architecture boundary.
//!
//! The trait is defined here in `tutor-core` (pure Rust). The fetch-based
//! implementation lives in `tutor-platform`. The core never imports
//! platform code; it only depends on this trait.
//!
//! Authentication is carried implicitly by the transport's cookie scope,
//! never passed through these methods.

use async_trait::async_trait;
use serde_json::Value;
use tutor_types::{
    exercise::{DatabaseSchema, Exercise, ExerciseFilter},
    result::{AiReply, AiRequest, QueryResult, SubmitResult},
    session::Credentials,
    Result,
};

/// The raw HTTP surface of the grading backend.
#[async_trait(?Send)]
pub trait BackendPort {
    /// `GET /auth/me/` — returns the raw body; interpretation of the
    /// loosely typed payload happens in the session manager.
    async fn me(&self) -> Result<Value>;

    /// `POST /auth/login/` — resolves to the authenticated username.
    async fn login(&self, credentials: &Credentials) -> Result<String>;

    /// `POST /auth/signup/` — signup logs the new account in.
    async fn signup(&self, credentials: &Credentials) -> Result<String>;

    /// `POST /auth/logout/` — best-effort; callers proceed regardless.
    async fn logout(&self) -> Result<()>;

    /// `GET /schemas/`
    async fn schemas(&self) -> Result<Vec<DatabaseSchema>>;

    /// `GET /exercises/` with optional filter parameters.
    async fn exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>>;

    /// `GET /exercises/{id}/`
    async fn exercise(&self, id: i64) -> Result<Exercise>;

    /// `POST /exercises/{id}/execute/`
    async fn execute(&self, exercise_id: i64, query: &str) -> Result<QueryResult>;

    /// `POST /exercises/{id}/submit/`
    async fn submit(&self, exercise_id: i64, query: &str) -> Result<SubmitResult>;

    /// `POST /exercises/{id}/ai/`
    async fn ask_ai(&self, exercise_id: i64, request: &AiRequest) -> Result<AiReply>;
}
