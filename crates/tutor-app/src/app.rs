//! Main egui application — routes between the auth view and the
//! workspace, and owns the wiring of core components.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel, Vec2};
use wasm_bindgen::JsValue;

use tutor_core::gateway::DataAccessGateway;
use tutor_core::guard::{decide, RouteDecision};
use tutor_core::ports::BackendPort;
use tutor_core::session::SessionManager;
use tutor_core::workspace::WorkspaceController;
use tutor_platform::HttpBackend;
use tutor_types::config::AppConfig;
use tutor_types::exercise::ExerciseFilter;
use tutor_types::session::Credentials;
use tutor_ui::panels::{assistant, auth, catalog, editor, header, problem, results};
use tutor_ui::state::{AuthMode, UiState};
use tutor_ui::theme;

/// The single protected location of this app.
const WORKSPACE_ROUTE: &str = "/workspace";
/// Exercise opened when the workspace first becomes visible.
const FIRST_EXERCISE_ID: i64 = 1;

/// The main application state
pub struct TutorApp {
    session: SessionManager,
    workspace: WorkspaceController,
    ui_state: UiState,
    /// Error message slot filled by async auth tasks.
    auth_feedback: Rc<RefCell<Option<String>>>,
    auth_busy: Rc<Cell<bool>>,
    /// Location the user was headed to before being sent to login.
    return_to: Option<String>,
    workspace_started: bool,
    first_frame: bool,
}

impl TutorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = detect_config();
        log::info!("backend at {}", config.api_base);

        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(&config));
        let session = SessionManager::new(backend.clone());
        let workspace = WorkspaceController::new(DataAccessGateway::new(backend));

        // Reconcile the session with the backend exactly once at startup.
        let startup = session.clone();
        wasm_bindgen_futures::spawn_local(async move { startup.refresh().await });

        Self {
            session,
            workspace,
            ui_state: UiState::new(),
            auth_feedback: Rc::new(RefCell::new(None)),
            auth_busy: Rc::new(Cell::new(false)),
            return_to: None,
            workspace_started: false,
            first_frame: true,
        }
    }

    fn render_loading(&self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Loading...").color(theme::TEXT_SECONDARY));
            });
        });
    }

    fn render_auth(&mut self, ctx: &egui::Context) {
        // Pull feedback written by the async login/signup task.
        if let Some(message) = self.auth_feedback.borrow_mut().take() {
            self.ui_state.auth.error = Some(message);
        }
        self.ui_state.auth.submitting = self.auth_busy.get();

        CentralPanel::default().show(ctx, |ui| {
            if let Some(submit) = auth::auth_panel(ui, &mut self.ui_state.auth) {
                self.auth_busy.set(true);
                let session = self.session.clone();
                let feedback = self.auth_feedback.clone();
                let busy = self.auth_busy.clone();
                let credentials = Credentials {
                    username: submit.username,
                    password: submit.password,
                };
                let mode = submit.mode;
                spawn(ctx, async move {
                    let result = match mode {
                        AuthMode::Login => session.login(&credentials).await,
                        AuthMode::Signup => session.signup(&credentials).await,
                    };
                    if let Err(e) = result {
                        *feedback.borrow_mut() = Some(e.to_string());
                    }
                    busy.set(false);
                });
            }
        });
    }

    fn render_workspace(&mut self, ctx: &egui::Context) {
        if !self.workspace_started {
            self.workspace_started = true;
            spawn(ctx, self.workspace.select_exercise(FIRST_EXERCISE_ID));
            spawn(ctx, self.workspace.load_catalog(ExerciseFilter::default()));
        }

        let session = self.session.snapshot();
        let ws = self.workspace.snapshot();

        // ── Header ───────────────────────────────────────────
        TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(action) = header::header_bar(ui, &session, &ws) {
                match action {
                    header::HeaderAction::OpenCatalog => {
                        self.ui_state.show_catalog = true;
                        spawn(ctx, self.workspace.load_catalog(ExerciseFilter::default()));
                    }
                    header::HeaderAction::ToggleDemo => {
                        spawn(ctx, self.workspace.set_demo_mode(!ws.demo_mode));
                    }
                    header::HeaderAction::Logout => {
                        let session = self.session.clone();
                        spawn(ctx, async move { session.logout().await });
                    }
                }
            }
        });

        // ── Exercise picker ──────────────────────────────────
        if self.ui_state.show_catalog {
            if let Some(id) = catalog::catalog_window(ctx, &mut self.ui_state, &ws) {
                spawn(ctx, self.workspace.select_exercise(id));
                self.ui_state.show_catalog = false;
            }
        }

        // ── Three columns: problem | editor+results | chat ───
        SidePanel::left("problem_panel")
            .min_width(240.0)
            .default_width(300.0)
            .show(ctx, |ui| {
                problem::problem_panel(ui, ws.current_exercise.as_ref(), ws.is_loading);
            });

        SidePanel::right("assistant_panel")
            .min_width(260.0)
            .default_width(320.0)
            .show(ctx, |ui| {
                if let Some(message) = assistant::assistant_panel(ui, &mut self.ui_state, &ws) {
                    spawn(ctx, self.workspace.send_message(&message));
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let results_height = (available.y * 0.35).max(140.0);
            let editor_height = available.y - results_height - 12.0;

            ui.allocate_ui(Vec2::new(available.x, editor_height), |ui| {
                let mut code = ws.code.clone();
                let busy = ws.is_loading || ws.is_executing || ws.is_submitting;
                let action =
                    editor::editor_panel(ui, &mut code, ws.current_exercise.is_some(), busy);
                if code != ws.code {
                    self.workspace.set_code(code);
                }
                match action {
                    Some(editor::EditorAction::Run) => spawn(ctx, self.workspace.run_query()),
                    Some(editor::EditorAction::Submit) => spawn(ctx, self.workspace.submit()),
                    None => {}
                }
            });

            ui.add_space(4.0);

            ui.allocate_ui(Vec2::new(available.x, results_height), |ui| {
                results::results_panel(ui, ws.query_result.as_ref(), ws.submit_result.as_ref());
            });
        });
    }
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let session = self.session.snapshot();
        match decide(&session, WORKSPACE_ROUTE) {
            RouteDecision::Loading => self.render_loading(ctx),
            RouteDecision::RedirectToLogin { from } => {
                self.return_to = Some(from);
                self.render_auth(ctx);
            }
            RouteDecision::Allow => {
                if let Some(from) = self.return_to.take() {
                    log::debug!("signed in, returning to {}", from);
                }
                self.render_workspace(ctx);
            }
        }

        // Async completions repaint via the spawn helper; in-flight work
        // keeps the frame loop warm.
        let ws = self.workspace.snapshot();
        if session.is_loading
            || ws.is_loading
            || ws.is_executing
            || ws.is_submitting
            || ws.chat_pending
            || self.auth_busy.get()
        {
            ctx.request_repaint();
        }
    }
}

/// Spawn a task and repaint when it settles.
fn spawn(ctx: &egui::Context, task: impl Future<Output = ()> + 'static) {
    let ctx = ctx.clone();
    wasm_bindgen_futures::spawn_local(async move {
        task.await;
        ctx.request_repaint();
    });
}

/// Build config, honoring a `TUTOR_API_BASE` global set by the hosting
/// page before falling back to the compile-time default.
fn detect_config() -> AppConfig {
    if let Some(window) = web_sys::window() {
        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str("TUTOR_API_BASE")) {
            if let Some(base) = value.as_string() {
                if !base.is_empty() {
                    return AppConfig::new(base);
                }
            }
        }
    }
    AppConfig::default()
}
