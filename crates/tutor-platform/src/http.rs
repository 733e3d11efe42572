//! HTTP adapter for the grading backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. Every
//! request carries the cookie credential scope — that is how the session
//! travels; nothing here reads or writes authentication state.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use web_sys::RequestCredentials;

use tutor_core::ports::BackendPort;
use tutor_types::{
    config::AppConfig,
    exercise::{DatabaseSchema, Exercise, ExerciseFilter},
    result::{AiReply, AiRequest, QueryResult, SubmitResult},
    session::Credentials,
    Result, TutorError,
};

/// Backend reached through the configured base URL.
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&format!("{}{}", self.base_url, path))
            .credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn me(&self) -> Result<Value> {
        let response = send(self.get("/auth/me/")).await?;
        let response = expect_ok(response)?;
        read_json(&response).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<String> {
        auth_round_trip(self.post("/auth/login/"), credentials).await
    }

    async fn signup(&self, credentials: &Credentials) -> Result<String> {
        auth_round_trip(self.post("/auth/signup/"), credentials).await
    }

    async fn logout(&self) -> Result<()> {
        send(self.post("/auth/logout/")).await?;
        Ok(())
    }

    async fn schemas(&self) -> Result<Vec<DatabaseSchema>> {
        fetch(self.get("/schemas/")).await
    }

    async fn exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let mut builder = self.get("/exercises/");
        if !filter.is_empty() {
            builder = builder.query(filter.to_query_pairs());
        }
        fetch(builder).await
    }

    async fn exercise(&self, id: i64) -> Result<Exercise> {
        fetch(self.get(&format!("/exercises/{}/", id))).await
    }

    async fn execute(&self, exercise_id: i64, query: &str) -> Result<QueryResult> {
        post_json(
            self.post(&format!("/exercises/{}/execute/", exercise_id)),
            &json!({ "query": query }),
        )
        .await
    }

    async fn submit(&self, exercise_id: i64, query: &str) -> Result<SubmitResult> {
        post_json(
            self.post(&format!("/exercises/{}/submit/", exercise_id)),
            &json!({ "query": query }),
        )
        .await
    }

    async fn ask_ai(&self, exercise_id: i64, request: &AiRequest) -> Result<AiReply> {
        post_json(
            self.post(&format!("/exercises/{}/ai/", exercise_id)),
            request,
        )
        .await
    }
}

// ─── Request helpers ─────────────────────────────────────────

fn net(e: gloo_net::Error) -> TutorError {
    TutorError::Network(e.to_string())
}

async fn send(builder: RequestBuilder) -> Result<Response> {
    builder.send().await.map_err(net)
}

fn expect_ok(response: Response) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(TutorError::Http {
            status: response.status(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| TutorError::Serialization(e.to_string()))
}

async fn fetch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let response = expect_ok(send(builder).await?)?;
    read_json(&response).await
}

async fn post_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &impl Serialize,
) -> Result<T> {
    let response = builder.json(body).map_err(net)?.send().await.map_err(net)?;
    let response = expect_ok(response)?;
    read_json(&response).await
}

/// Login and signup share one shape: `{username}` on success, `{error}`
/// with a non-success status on failure. A success body without a
/// username falls back to the one that was submitted.
async fn auth_round_trip(builder: RequestBuilder, credentials: &Credentials) -> Result<String> {
    let response = builder
        .json(credentials)
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;

    let body: Value = response.json().await.unwrap_or(Value::Null);
    if !response.ok() {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Request failed")
            .to_string();
        return Err(TutorError::Auth(message));
    }

    Ok(body
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or(&credentials.username)
        .to_string())
}
