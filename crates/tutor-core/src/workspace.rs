//! Workspace lifecycle for the active exercise: selection and loading,
//! the editable query buffer, execution/submission results, the exercise
//! catalog, and the assistant conversation thread.
//!
//! Loads race: selecting another exercise or toggling demo mode while a
//! load is in flight starts a second load. Each load captures a
//! generation token at call time and applies its result only while that
//! token is still the newest, so a slow stale response can never
//! overwrite state written by a newer request. Superseded responses are
//! discarded client-side; the in-flight request itself is not aborted.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use tutor_types::chat::ChatMessage;
use tutor_types::exercise::{DatabaseSchema, Exercise, ExerciseFilter};
use tutor_types::result::{AiRequest, QueryResult, SubmitResult};

use crate::gateway::{DataAccessGateway, DataSource, Sourced};

/// Seed for the buffer when an exercise ships without an initial query.
pub const DEFAULT_QUERY: &str = "SELECT 1";

/// Bubble shown when a live assistant call fails. The assistant is the
/// one operation whose degradation is surfaced in the conversation
/// instead of being papered over with fixture data.
pub const ASSISTANT_UNAVAILABLE: &str = "Error contacting AI";

/// State owned by the controller, mutated only through its operations.
/// The UI reads snapshots.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub selected_exercise_id: Option<i64>,
    pub demo_mode: bool,
    pub current_exercise: Option<Exercise>,
    /// Free-form user-owned buffer, reseeded on every applied load.
    pub code: String,
    pub query_result: Option<QueryResult>,
    pub submit_result: Option<SubmitResult>,
    pub is_loading: bool,
    pub is_executing: bool,
    pub is_submitting: bool,
    pub chat: Vec<ChatMessage>,
    pub chat_pending: bool,
    pub exercises: Vec<Exercise>,
    pub schemas: Vec<DatabaseSchema>,
    /// Origin of the most recent gateway completion, for the degraded-mode
    /// banner.
    pub last_source: Option<DataSource>,
}

impl WorkspaceState {
    fn new() -> Self {
        Self {
            selected_exercise_id: None,
            demo_mode: false,
            current_exercise: None,
            code: String::new(),
            query_result: None,
            submit_result: None,
            is_loading: false,
            is_executing: false,
            is_submitting: false,
            chat: Vec::new(),
            chat_pending: false,
            exercises: Vec::new(),
            schemas: Vec::new(),
            last_source: None,
        }
    }
}

/// Clone-cheap handle; all clones share one state.
#[derive(Clone)]
pub struct WorkspaceController {
    state: Rc<RefCell<WorkspaceState>>,
    generation: Rc<Cell<u64>>,
    gateway: DataAccessGateway,
}

impl WorkspaceController {
    pub fn new(gateway: DataAccessGateway) -> Self {
        Self {
            state: Rc::new(RefCell::new(WorkspaceState::new())),
            generation: Rc::new(Cell::new(0)),
            gateway,
        }
    }

    pub fn snapshot(&self) -> WorkspaceState {
        self.state.borrow().clone()
    }

    /// The buffer belongs to the user between loads.
    pub fn set_code(&self, code: String) {
        self.state.borrow_mut().code = code;
    }

    /// Choose the active exercise. Returns the load for the caller to
    /// spawn.
    pub fn select_exercise(&self, id: i64) -> impl Future<Output = ()> + 'static {
        self.state.borrow_mut().selected_exercise_id = Some(id);
        self.load_selected()
    }

    /// Toggling demo mode reloads the selection under the new source.
    pub fn set_demo_mode(&self, demo: bool) -> impl Future<Output = ()> + 'static {
        self.state.borrow_mut().demo_mode = demo;
        self.load_selected()
    }

    /// Reload the selected exercise. A no-op future when nothing is
    /// selected.
    pub fn load_selected(&self) -> impl Future<Output = ()> + 'static {
        let this = self.clone();
        let (id, demo) = {
            let state = self.state.borrow();
            (state.selected_exercise_id, state.demo_mode)
        };
        // Token and loading flag are taken at call time, not first poll,
        // so ordering follows the user's actions.
        let token = id.map(|_| {
            self.state.borrow_mut().is_loading = true;
            self.next_token()
        });
        async move {
            let (Some(id), Some(token)) = (id, token) else {
                return;
            };
            let loaded = this.gateway.get_exercise(id, demo).await;
            if !this.token_is_current(token) {
                log::debug!("discarding stale load for exercise {}", id);
                return;
            }
            this.apply_loaded(loaded);
        }
    }

    /// Execute the current buffer. No-op when no exercise is loaded.
    pub fn run_query(&self) -> impl Future<Output = ()> + 'static {
        let this = self.clone();
        let call = {
            let mut state = self.state.borrow_mut();
            match state.current_exercise.as_ref().map(|e| e.id) {
                Some(id) => {
                    state.is_executing = true;
                    Some((id, state.code.clone(), state.demo_mode, self.generation.get()))
                }
                None => None,
            }
        };
        async move {
            let Some((id, query, demo, token)) = call else {
                return;
            };
            let result = this.gateway.execute_query(id, &query, demo).await;
            let mut state = this.state.borrow_mut();
            state.is_executing = false;
            // A reload in the meantime already cleared the result slots.
            if this.generation.get() != token {
                return;
            }
            state.last_source = Some(result.source);
            state.query_result = Some(result.value);
        }
    }

    /// Submit the current buffer for grading. No-op when no exercise is
    /// loaded.
    pub fn submit(&self) -> impl Future<Output = ()> + 'static {
        let this = self.clone();
        let call = {
            let mut state = self.state.borrow_mut();
            match state.current_exercise.as_ref().map(|e| e.id) {
                Some(id) => {
                    state.is_submitting = true;
                    Some((id, state.code.clone(), state.demo_mode, self.generation.get()))
                }
                None => None,
            }
        };
        async move {
            let Some((id, query, demo, token)) = call else {
                return;
            };
            let result = this.gateway.submit_query(id, &query, demo).await;
            let mut state = this.state.borrow_mut();
            state.is_submitting = false;
            if this.generation.get() != token {
                return;
            }
            state.last_source = Some(result.source);
            state.submit_result = Some(result.value);
        }
    }

    /// Append a user message and ask the assistant about the current
    /// buffer. Empty input or no loaded exercise is a silent no-op.
    pub fn send_message(&self, text: &str) -> impl Future<Output = ()> + 'static {
        let this = self.clone();
        let text = text.trim().to_string();
        let call = {
            let mut state = self.state.borrow_mut();
            match state.current_exercise.as_ref().map(|e| e.id) {
                Some(id) if !text.is_empty() => {
                    state.chat.push(ChatMessage::user(text.clone()));
                    state.chat_pending = true;
                    let request = AiRequest {
                        message: text,
                        user_query: Some(state.code.clone()),
                        error: state.query_result.as_ref().and_then(|r| r.error.clone()),
                    };
                    Some((id, request, state.demo_mode))
                }
                _ => None,
            }
        };
        async move {
            let Some((id, request, demo)) = call else {
                return;
            };
            let reply = this.gateway.ask_assistant(id, &request, demo).await;
            let mut state = this.state.borrow_mut();
            state.chat_pending = false;
            // The thread belongs to one exercise; a reply that raced an
            // exercise switch would land in the wrong conversation.
            if state.current_exercise.as_ref().map(|e| e.id) != Some(id) {
                return;
            }
            let text = if reply.is_fallback() {
                ASSISTANT_UNAVAILABLE.to_string()
            } else {
                reply.value.response
            };
            state.chat.push(ChatMessage::ai(text));
        }
    }

    /// Fetch the exercise catalog and schema list for the picker.
    pub fn load_catalog(&self, filter: ExerciseFilter) -> impl Future<Output = ()> + 'static {
        let this = self.clone();
        let demo = self.state.borrow().demo_mode;
        async move {
            let exercises = this.gateway.list_exercises(demo, &filter).await;
            let schemas = this.gateway.list_schemas(demo).await;
            let mut state = this.state.borrow_mut();
            state.last_source = Some(exercises.source);
            state.exercises = exercises.value;
            state.schemas = schemas.value;
        }
    }

    fn next_token(&self) -> u64 {
        let token = self.generation.get() + 1;
        self.generation.set(token);
        token
    }

    fn token_is_current(&self, token: u64) -> bool {
        self.generation.get() == token
    }

    fn apply_loaded(&self, loaded: Sourced<Exercise>) {
        let mut state = self.state.borrow_mut();
        let exercise = loaded.value;

        state.last_source = Some(loaded.source);
        state.code = if exercise.initial_query.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            exercise.initial_query.clone()
        };
        // Results never survive a load, not even a reload of the same id.
        state.query_result = None;
        state.submit_result = None;
        // The conversation follows the exercise, not the load.
        if state.current_exercise.as_ref().map(|e| e.id) != Some(exercise.id) {
            state.chat.clear();
            state.chat_pending = false;
        }
        state.current_exercise = Some(exercise);
        state.is_loading = false;
    }
}
