//! Uniform asynchronous access to the six remote data operations.
//!
//! Every operation is total: demo mode returns fixture data with no
//! network access, and a failed live call falls back to the same fixture
//! instead of raising. Callers therefore have no error branch; the
//! `source` tag is how they tell demo-by-request apart from a live call
//! that degraded.

use std::future::Future;
use std::rc::Rc;

use tutor_types::{
    exercise::{DatabaseSchema, Exercise, ExerciseFilter},
    result::{AiReply, AiRequest, QueryResult, SubmitResult},
    Result,
};

use crate::fixtures;
use crate::ports::BackendPort;

/// Where a gateway value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The live backend answered.
    Live,
    /// Demo mode was requested; no network access happened.
    Demo,
    /// The live call failed and fixture data was served instead.
    Fallback,
}

/// A gateway value tagged with its origin.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub value: T,
    pub source: DataSource,
    /// Display string of the swallowed error; set only for `Fallback`.
    pub cause: Option<String>,
}

impl<T> Sourced<T> {
    fn live(value: T) -> Self {
        Self {
            value,
            source: DataSource::Live,
            cause: None,
        }
    }

    fn demo(value: T) -> Self {
        Self {
            value,
            source: DataSource::Demo,
            cause: None,
        }
    }

    fn fallback(value: T, cause: String) -> Self {
        Self {
            value,
            source: DataSource::Fallback,
            cause: Some(cause),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Clone-cheap handle over the backend port plus the fixture dataset.
#[derive(Clone)]
pub struct DataAccessGateway {
    backend: Rc<dyn BackendPort>,
}

impl DataAccessGateway {
    pub fn new(backend: Rc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    pub async fn list_schemas(&self, demo: bool) -> Sourced<Vec<DatabaseSchema>> {
        if demo {
            return Sourced::demo(fixtures::schemas());
        }
        live_or_fixture(self.backend.schemas(), fixtures::schemas(), "schema list").await
    }

    pub async fn list_exercises(
        &self,
        demo: bool,
        filter: &ExerciseFilter,
    ) -> Sourced<Vec<Exercise>> {
        if demo {
            return Sourced::demo(fixtures::exercises());
        }
        live_or_fixture(
            self.backend.exercises(filter),
            fixtures::exercises(),
            "exercise list",
        )
        .await
    }

    pub async fn get_exercise(&self, id: i64, demo: bool) -> Sourced<Exercise> {
        if demo {
            return Sourced::demo(fixtures::exercise(id));
        }
        live_or_fixture(self.backend.exercise(id), fixtures::exercise(id), "exercise").await
    }

    pub async fn execute_query(
        &self,
        exercise_id: i64,
        query: &str,
        demo: bool,
    ) -> Sourced<QueryResult> {
        if demo {
            return Sourced::demo(fixtures::query_result());
        }
        live_or_fixture(
            self.backend.execute(exercise_id, query),
            fixtures::query_result(),
            "query execution",
        )
        .await
    }

    pub async fn submit_query(
        &self,
        exercise_id: i64,
        query: &str,
        demo: bool,
    ) -> Sourced<SubmitResult> {
        if demo {
            return Sourced::demo(fixtures::submit_result());
        }
        live_or_fixture(
            self.backend.submit(exercise_id, query),
            fixtures::submit_result(),
            "submission",
        )
        .await
    }

    pub async fn ask_assistant(
        &self,
        exercise_id: i64,
        request: &AiRequest,
        demo: bool,
    ) -> Sourced<AiReply> {
        if demo {
            return Sourced::demo(fixtures::ai_reply());
        }
        live_or_fixture(
            self.backend.ask_ai(exercise_id, request),
            fixtures::ai_reply(),
            "assistant",
        )
        .await
    }
}

async fn live_or_fixture<T>(
    call: impl Future<Output = Result<T>>,
    fixture: T,
    what: &str,
) -> Sourced<T> {
    match call.await {
        Ok(value) => Sourced::live(value),
        Err(e) => {
            log::warn!("{} unavailable, serving fixture data: {}", what, e);
            Sourced::fallback(fixture, e.to_string())
        }
    }
}
