#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use tutor_types::exercise::{
        DatabaseSchema, Difficulty, Exercise, ExerciseFilter, SchemaRef,
    };
    use tutor_types::result::{AiReply, AiRequest, QueryResult, SubmitResult};
    use tutor_types::session::Credentials;
    use tutor_types::{Result, TutorError};

    use crate::fixtures;
    use crate::gateway::{DataAccessGateway, DataSource};
    use crate::guard::{decide, RouteDecision};
    use crate::ports::BackendPort;
    use crate::session::SessionManager;
    use crate::workspace::{WorkspaceController, ASSISTANT_UNAVAILABLE, DEFAULT_QUERY};

    // Simple futures executor for single-threaded tests (not in WASM here)
    fn block_on<F: std::future::Future<Output = T>, T>(f: F) -> T {
        use std::sync::Arc;
        use std::task::{Context, Poll, Wake, Waker};

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(val) => return val,
                Poll::Pending => {
                    // Mock backends complete immediately, so this does not
                    // actually spin.
                    std::thread::yield_now();
                }
            }
        }
    }

    // ─── Backend Stubs ───────────────────────────────────────

    fn live_exercise(id: i64) -> Exercise {
        Exercise {
            id,
            title: format!("Live exercise {}", id),
            description: "Fetched from the backend.".to_string(),
            difficulty: Difficulty::Hard,
            initial_query: format!("SELECT {} FROM live", id),
            hints: Vec::new(),
            schema: SchemaRef {
                id: 9,
                name: "live".to_string(),
                display_name: "Live DB".to_string(),
                db_name: "live".to_string(),
            },
            tags: Vec::new(),
        }
    }

    fn live_query_result() -> QueryResult {
        QueryResult {
            success: true,
            columns: vec!["answer".to_string()],
            rows: vec![vec![json!(42)]],
            row_count: 1,
            execution_time: 2.0,
            error: None,
        }
    }

    fn live_submit_result() -> SubmitResult {
        SubmitResult {
            correct: false,
            message: "Row 2 differs.".to_string(),
            user_result: live_query_result(),
            diff: None,
        }
    }

    /// Backend that answers every call, counting them. `failing()` makes
    /// every call return a network error instead.
    struct StubBackend {
        fail: bool,
        me_body: Option<Value>,
        calls: Cell<u32>,
    }

    impl StubBackend {
        fn ok() -> Self {
            Self {
                fail: false,
                me_body: None,
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                me_body: None,
                calls: Cell::new(0),
            }
        }

        fn with_me(body: Value) -> Self {
            Self {
                fail: false,
                me_body: Some(body),
                calls: Cell::new(0),
            }
        }

        fn record(&self) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(TutorError::Network("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl BackendPort for StubBackend {
        async fn me(&self) -> Result<Value> {
            self.record()?;
            self.me_body
                .clone()
                .ok_or(TutorError::Http { status: 401 })
        }

        async fn login(&self, credentials: &Credentials) -> Result<String> {
            self.record()?;
            Ok(credentials.username.clone())
        }

        async fn signup(&self, credentials: &Credentials) -> Result<String> {
            self.record()?;
            Ok(credentials.username.clone())
        }

        async fn logout(&self) -> Result<()> {
            self.record()
        }

        async fn schemas(&self) -> Result<Vec<DatabaseSchema>> {
            self.record()?;
            Ok(vec![DatabaseSchema {
                id: 9,
                name: "live".to_string(),
                display_name: "Live DB".to_string(),
                description: String::new(),
                exercise_count: 2,
            }])
        }

        async fn exercises(&self, _filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
            self.record()?;
            Ok(vec![live_exercise(1), live_exercise(2)])
        }

        async fn exercise(&self, id: i64) -> Result<Exercise> {
            self.record()?;
            Ok(live_exercise(id))
        }

        async fn execute(&self, _exercise_id: i64, _query: &str) -> Result<QueryResult> {
            self.record()?;
            Ok(live_query_result())
        }

        async fn submit(&self, _exercise_id: i64, _query: &str) -> Result<SubmitResult> {
            self.record()?;
            Ok(live_submit_result())
        }

        async fn ask_ai(&self, _exercise_id: i64, request: &AiRequest) -> Result<AiReply> {
            self.record()?;
            Ok(AiReply {
                response: format!("echo: {}", request.message),
            })
        }
    }

    /// Backend whose auth endpoints reject with a message, the way the
    /// real one answers a bad password.
    struct RejectingBackend;

    #[async_trait(?Send)]
    impl BackendPort for RejectingBackend {
        async fn me(&self) -> Result<Value> {
            Err(TutorError::Http { status: 401 })
        }

        async fn login(&self, _credentials: &Credentials) -> Result<String> {
            Err(TutorError::Auth("Invalid credentials".to_string()))
        }

        async fn signup(&self, _credentials: &Credentials) -> Result<String> {
            Err(TutorError::Auth("Username already taken".to_string()))
        }

        async fn logout(&self) -> Result<()> {
            Err(TutorError::Http { status: 500 })
        }

        async fn schemas(&self) -> Result<Vec<DatabaseSchema>> {
            Err(TutorError::Http { status: 500 })
        }

        async fn exercises(&self, _filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
            Err(TutorError::Http { status: 500 })
        }

        async fn exercise(&self, _id: i64) -> Result<Exercise> {
            Err(TutorError::Http { status: 500 })
        }

        async fn execute(&self, _exercise_id: i64, _query: &str) -> Result<QueryResult> {
            Err(TutorError::Http { status: 500 })
        }

        async fn submit(&self, _exercise_id: i64, _query: &str) -> Result<SubmitResult> {
            Err(TutorError::Http { status: 500 })
        }

        async fn ask_ai(&self, _exercise_id: i64, _request: &AiRequest) -> Result<AiReply> {
            Err(TutorError::Http { status: 500 })
        }
    }

    fn manager(backend: Rc<StubBackend>) -> SessionManager {
        SessionManager::new(backend)
    }

    fn controller(backend: Rc<StubBackend>) -> WorkspaceController {
        WorkspaceController::new(DataAccessGateway::new(backend))
    }

    // ─── SessionManager Tests ────────────────────────────────

    #[test]
    fn test_session_initial_snapshot_is_loading() {
        let session = manager(Rc::new(StubBackend::ok()));
        let snapshot = session.snapshot();
        assert!(snapshot.is_loading);
        assert!(!snapshot.is_authenticated);
    }

    #[test]
    fn test_refresh_network_error_fails_closed() {
        let session = manager(Rc::new(StubBackend::failing()));
        block_on(session.refresh());
        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.username.is_none());
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn test_refresh_non_success_status_fails_closed() {
        // StubBackend::ok() without a me body answers 401.
        let session = manager(Rc::new(StubBackend::ok()));
        block_on(session.refresh());
        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.username.is_none());
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn test_refresh_malformed_body_fails_closed() {
        let session = manager(Rc::new(StubBackend::with_me(json!("not an object"))));
        block_on(session.refresh());
        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn test_refresh_explicit_flag_true() {
        let session = manager(Rc::new(StubBackend::with_me(
            json!({"authenticated": true, "username": "bob"}),
        )));
        block_on(session.refresh());
        let snapshot = session.snapshot();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.username.as_deref(), Some("bob"));
    }

    #[test]
    fn test_refresh_explicit_flag_false_drops_stray_username() {
        let session = manager(Rc::new(StubBackend::with_me(
            json!({"authenticated": false, "username": "bob"}),
        )));
        block_on(session.refresh());
        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.username.is_none());
    }

    #[test]
    fn test_refresh_infers_from_bare_username() {
        let session = manager(Rc::new(StubBackend::with_me(json!({"username": "ana"}))));
        block_on(session.refresh());
        let snapshot = session.snapshot();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.username.as_deref(), Some("ana"));
    }

    #[test]
    fn test_refresh_empty_body_is_unauthenticated() {
        let session = manager(Rc::new(StubBackend::with_me(json!({}))));
        block_on(session.refresh());
        assert!(!session.snapshot().is_authenticated);
    }

    #[test]
    fn test_set_auth_normalizes_username_when_logged_out() {
        let session = manager(Rc::new(StubBackend::ok()));
        session.set_auth(false, Some("ghost".to_string()));
        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.username.is_none());
    }

    #[test]
    fn test_login_success_updates_session_without_second_round_trip() {
        let backend = Rc::new(StubBackend::ok());
        let session = manager(backend.clone());
        let credentials = Credentials {
            username: "ana".to_string(),
            password: "pw".to_string(),
        };
        block_on(session.login(&credentials)).unwrap();
        let snapshot = session.snapshot();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.username.as_deref(), Some("ana"));
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn test_login_failure_surfaces_message_and_leaves_session() {
        let session = SessionManager::new(Rc::new(RejectingBackend));
        let credentials = Credentials {
            username: "ana".to_string(),
            password: "wrong".to_string(),
        };
        let err = block_on(session.login(&credentials)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!session.snapshot().is_authenticated);
    }

    #[test]
    fn test_logout_clears_session_even_when_backend_fails() {
        let session = SessionManager::new(Rc::new(RejectingBackend));
        session.set_auth(true, Some("ana".to_string()));
        block_on(session.logout());
        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.username.is_none());
    }

    // ─── DataAccessGateway Tests ─────────────────────────────

    #[test]
    fn test_demo_calls_touch_no_network() {
        let backend = Rc::new(StubBackend::ok());
        let gateway = DataAccessGateway::new(backend.clone());
        let request = AiRequest {
            message: "hi".to_string(),
            user_query: None,
            error: None,
        };

        block_on(async {
            gateway.list_schemas(true).await;
            gateway.list_exercises(true, &ExerciseFilter::default()).await;
            gateway.get_exercise(1, true).await;
            gateway.execute_query(1, "SELECT 1", true).await;
            gateway.submit_query(1, "SELECT 1", true).await;
            gateway.ask_assistant(1, &request, true).await;
        });

        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn test_demo_calls_are_deterministic() {
        let gateway = DataAccessGateway::new(Rc::new(StubBackend::ok()));
        let first = block_on(gateway.get_exercise(3, true));
        let second = block_on(gateway.get_exercise(3, true));
        assert_eq!(first.value, second.value);
        assert_eq!(first.source, DataSource::Demo);
        assert!(first.cause.is_none());
    }

    #[test]
    fn test_live_success_is_tagged_live() {
        let gateway = DataAccessGateway::new(Rc::new(StubBackend::ok()));
        let result = block_on(gateway.get_exercise(2, false));
        assert_eq!(result.source, DataSource::Live);
        assert!(result.cause.is_none());
        assert_eq!(result.value, live_exercise(2));
    }

    #[test]
    fn test_failing_transport_falls_back_to_demo_values() {
        let demo = DataAccessGateway::new(Rc::new(StubBackend::ok()));
        let broken = DataAccessGateway::new(Rc::new(StubBackend::failing()));
        let request = AiRequest {
            message: "hi".to_string(),
            user_query: None,
            error: None,
        };

        block_on(async {
            assert_eq!(
                broken.list_schemas(false).await.value,
                demo.list_schemas(true).await.value
            );
            assert_eq!(
                broken
                    .list_exercises(false, &ExerciseFilter::default())
                    .await
                    .value,
                demo.list_exercises(true, &ExerciseFilter::default())
                    .await
                    .value
            );
            assert_eq!(
                broken.get_exercise(2, false).await.value,
                demo.get_exercise(2, true).await.value
            );
            assert_eq!(
                broken.execute_query(1, "SELECT 1", false).await.value,
                demo.execute_query(1, "SELECT 1", true).await.value
            );
            assert_eq!(
                broken.submit_query(1, "SELECT 1", false).await.value,
                demo.submit_query(1, "SELECT 1", true).await.value
            );
            assert_eq!(
                broken.ask_assistant(1, &request, false).await.value,
                demo.ask_assistant(1, &request, true).await.value
            );
        });
    }

    #[test]
    fn test_fallback_is_tagged_with_cause() {
        let gateway = DataAccessGateway::new(Rc::new(StubBackend::failing()));
        let result = block_on(gateway.list_schemas(false));
        assert_eq!(result.source, DataSource::Fallback);
        assert!(result.is_fallback());
        assert!(result.cause.as_deref().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_demo_exercise_selected_by_id() {
        let gateway = DataAccessGateway::new(Rc::new(StubBackend::ok()));
        let result = block_on(gateway.get_exercise(2, true));
        assert_eq!(result.value.id, 2);
        assert_eq!(result.value.title, "Count by Department");
    }

    #[test]
    fn test_demo_exercise_unknown_id_defaults_to_first() {
        let gateway = DataAccessGateway::new(Rc::new(StubBackend::ok()));
        let result = block_on(gateway.get_exercise(999, true));
        assert_eq!(result.value.id, fixtures::exercises()[0].id);
    }

    // ─── WorkspaceController Tests ───────────────────────────

    #[test]
    fn test_load_applies_exercise_and_seeds_code() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));
        let state = ctrl.snapshot();
        assert_eq!(state.selected_exercise_id, Some(1));
        assert_eq!(state.current_exercise.as_ref().unwrap().id, 1);
        assert_eq!(state.code, "SELECT 1 FROM live");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_load_seeds_default_query_when_initial_is_empty() {
        struct BareBackend;

        #[async_trait(?Send)]
        impl BackendPort for BareBackend {
            async fn me(&self) -> Result<Value> {
                Ok(json!({}))
            }
            async fn login(&self, c: &Credentials) -> Result<String> {
                Ok(c.username.clone())
            }
            async fn signup(&self, c: &Credentials) -> Result<String> {
                Ok(c.username.clone())
            }
            async fn logout(&self) -> Result<()> {
                Ok(())
            }
            async fn schemas(&self) -> Result<Vec<DatabaseSchema>> {
                Ok(Vec::new())
            }
            async fn exercises(&self, _filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
                Ok(Vec::new())
            }
            async fn exercise(&self, id: i64) -> Result<Exercise> {
                let mut exercise = live_exercise(id);
                exercise.initial_query.clear();
                Ok(exercise)
            }
            async fn execute(&self, _id: i64, _q: &str) -> Result<QueryResult> {
                Ok(live_query_result())
            }
            async fn submit(&self, _id: i64, _q: &str) -> Result<SubmitResult> {
                Ok(live_submit_result())
            }
            async fn ask_ai(&self, _id: i64, _r: &AiRequest) -> Result<AiReply> {
                Ok(fixtures::ai_reply())
            }
        }

        let ctrl = WorkspaceController::new(DataAccessGateway::new(Rc::new(BareBackend)));
        block_on(ctrl.select_exercise(5));
        assert_eq!(ctrl.snapshot().code, DEFAULT_QUERY);
    }

    #[test]
    fn test_stale_load_never_overwrites_newer_one() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        let slow = ctrl.select_exercise(1);
        let fast = ctrl.select_exercise(2);

        // The newer request resolves first; the older one trails in.
        block_on(fast);
        block_on(slow);

        let state = ctrl.snapshot();
        assert_eq!(state.current_exercise.as_ref().unwrap().id, 2);
        assert_eq!(state.code, "SELECT 2 FROM live");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_demo_toggle_mid_load_wins() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));

        let live_reload = ctrl.load_selected();
        let demo_reload = ctrl.set_demo_mode(true);
        block_on(demo_reload);
        block_on(live_reload);

        let state = ctrl.snapshot();
        assert!(state.demo_mode);
        // Fixture exercise 1, not the live one.
        assert_eq!(state.current_exercise.as_ref().unwrap().title, "Two Sum (SQL demo)");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_load_clears_results_even_for_same_id() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.run_query());
        block_on(ctrl.submit());
        assert!(ctrl.snapshot().query_result.is_some());
        assert!(ctrl.snapshot().submit_result.is_some());

        block_on(ctrl.load_selected());
        let state = ctrl.snapshot();
        assert!(state.query_result.is_none());
        assert!(state.submit_result.is_none());
    }

    #[test]
    fn test_run_and_submit_without_exercise_are_no_ops() {
        let backend = Rc::new(StubBackend::ok());
        let ctrl = controller(backend.clone());

        block_on(ctrl.run_query());
        block_on(ctrl.submit());

        let state = ctrl.snapshot();
        assert!(state.query_result.is_none());
        assert!(state.submit_result.is_none());
        assert!(!state.is_executing);
        assert!(!state.is_submitting);
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn test_run_query_replaces_result() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.run_query());
        let state = ctrl.snapshot();
        assert_eq!(state.query_result.as_ref().unwrap().columns, vec!["answer"]);
        assert!(!state.is_executing);
    }

    #[test]
    fn test_submit_replaces_result() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.submit());
        let state = ctrl.snapshot();
        assert!(!state.submit_result.as_ref().unwrap().correct);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_stale_execute_after_reload_is_discarded() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));

        let stale_run = ctrl.run_query();
        block_on(ctrl.select_exercise(2));
        block_on(stale_run);

        // The reload cleared the slot and the stale result stayed out.
        assert!(ctrl.snapshot().query_result.is_none());
    }

    #[test]
    fn test_send_message_appends_user_and_reply() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.send_message("why is my join slow?"));

        let state = ctrl.snapshot();
        assert_eq!(state.chat.len(), 2);
        assert_eq!(state.chat[0].text, "why is my join slow?");
        assert_eq!(state.chat[1].text, "echo: why is my join slow?");
        assert!(!state.chat_pending);
    }

    #[test]
    fn test_send_message_empty_or_unloaded_is_no_op() {
        let backend = Rc::new(StubBackend::ok());
        let ctrl = controller(backend.clone());

        block_on(ctrl.send_message("hello?"));
        assert!(ctrl.snapshot().chat.is_empty());

        block_on(ctrl.select_exercise(1));
        let calls_after_load = backend.calls.get();
        block_on(ctrl.send_message("   "));
        assert!(ctrl.snapshot().chat.is_empty());
        assert_eq!(backend.calls.get(), calls_after_load);
    }

    #[test]
    fn test_assistant_failure_surfaces_as_chat_bubble() {
        let backend = Rc::new(StubBackend::failing());
        let ctrl = controller(backend.clone());
        block_on(ctrl.set_demo_mode(true));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.set_demo_mode(false));

        block_on(ctrl.send_message("help"));
        let state = ctrl.snapshot();
        assert_eq!(state.chat.len(), 2);
        assert_eq!(state.chat[1].text, ASSISTANT_UNAVAILABLE);
    }

    #[test]
    fn test_assistant_demo_reply_uses_fixture_text() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.set_demo_mode(true));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.send_message("help"));

        let state = ctrl.snapshot();
        assert_eq!(state.chat[1].text, fixtures::ai_reply().response);
    }

    #[test]
    fn test_chat_clears_on_exercise_switch_but_not_reload() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));
        block_on(ctrl.send_message("first question"));
        assert_eq!(ctrl.snapshot().chat.len(), 2);

        // Reload of the same id keeps the thread.
        block_on(ctrl.load_selected());
        assert_eq!(ctrl.snapshot().chat.len(), 2);

        // A different exercise starts a fresh thread.
        block_on(ctrl.select_exercise(2));
        assert!(ctrl.snapshot().chat.is_empty());
    }

    #[test]
    fn test_stale_assistant_reply_is_discarded_after_switch() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.select_exercise(1));

        let pending_reply = ctrl.send_message("about exercise one");
        block_on(ctrl.select_exercise(2));
        block_on(pending_reply);

        // The reply belonged to exercise 1 and never reached thread 2.
        let state = ctrl.snapshot();
        assert!(state.chat.is_empty());
        assert!(!state.chat_pending);
    }

    #[test]
    fn test_load_catalog_fills_exercises_and_schemas() {
        let ctrl = controller(Rc::new(StubBackend::ok()));
        block_on(ctrl.load_catalog(ExerciseFilter::default()));
        let state = ctrl.snapshot();
        assert_eq!(state.exercises.len(), 2);
        assert_eq!(state.schemas.len(), 1);
        assert_eq!(state.last_source, Some(DataSource::Live));
    }

    #[test]
    fn test_load_catalog_honors_demo_mode() {
        let backend = Rc::new(StubBackend::ok());
        let ctrl = controller(backend.clone());
        block_on(ctrl.set_demo_mode(true));
        block_on(ctrl.load_catalog(ExerciseFilter::default()));
        let state = ctrl.snapshot();
        assert_eq!(state.exercises.len(), 3);
        assert_eq!(backend.calls.get(), 0);
    }

    // ─── RouteGuard Tests ────────────────────────────────────

    #[test]
    fn test_guard_loading_wins_over_authenticated() {
        let mut session = tutor_types::session::Session::new();
        session.is_authenticated = true;
        assert_eq!(decide(&session, "/workspace"), RouteDecision::Loading);
    }

    #[test]
    fn test_guard_redirects_preserving_location() {
        let session = tutor_types::session::Session {
            is_loading: false,
            is_authenticated: false,
            username: None,
        };
        assert_eq!(
            decide(&session, "/workspace"),
            RouteDecision::RedirectToLogin {
                from: "/workspace".to_string()
            }
        );
    }

    #[test]
    fn test_guard_allows_authenticated() {
        let session = tutor_types::session::Session {
            is_loading: false,
            is_authenticated: true,
            username: Some("ana".to_string()),
        };
        assert_eq!(decide(&session, "/workspace"), RouteDecision::Allow);
    }
}
