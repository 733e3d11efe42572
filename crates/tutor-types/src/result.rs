use serde::{Deserialize, Serialize};

/// Outcome of executing a query against the grading backend.
///
/// The transport may carry both a populated result and an `error` field at
/// the same time; presence of `error` is authoritative for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub success: bool,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    pub row_count: i64,
    #[serde(default)]
    pub execution_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Outcome of submitting a query for grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub correct: bool,
    pub message: String,
    pub user_result: QueryResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<serde_json::Value>,
}

/// Body of an assistant request.
#[derive(Debug, Clone, Serialize)]
pub struct AiRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiReply {
    pub response: String,
}
