//! Top bar — exercise picker button, demo toggle, degraded-mode banner,
//! and the signed-in user with a logout button.

use egui::{self, Align, Layout, RichText};

use tutor_core::gateway::DataSource;
use tutor_core::workspace::WorkspaceState;
use tutor_types::session::Session;

use crate::theme::*;

/// What the caller should do after rendering the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    OpenCatalog,
    ToggleDemo,
    Logout,
}

/// Render the header bar. Returns an action for the caller to handle.
pub fn header_bar(
    ui: &mut egui::Ui,
    session: &Session,
    workspace: &WorkspaceState,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("SQL Tutor")
                .strong()
                .color(ACCENT)
                .size(16.0),
        );
        ui.separator();

        if ui.button("Exercises").clicked() {
            action = Some(HeaderAction::OpenCatalog);
        }

        if ui
            .selectable_label(workspace.demo_mode, "Demo mode")
            .clicked()
        {
            action = Some(HeaderAction::ToggleDemo);
        }

        if workspace.last_source == Some(DataSource::Fallback) {
            ui.label(
                RichText::new("Backend unreachable — showing demo data")
                    .color(WARNING)
                    .small(),
            );
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                action = Some(HeaderAction::Logout);
            }
            if let Some(ref username) = session.username {
                ui.label(RichText::new(username).color(TEXT_SECONDARY).small());
            }
        });
    });

    action
}
