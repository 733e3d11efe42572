//! Login / signup card.

use egui::{self, RichText, Vec2};

use crate::state::{AuthForm, AuthMode};
use crate::theme::*;

/// A completed form submission for the app layer to send.
#[derive(Debug, Clone)]
pub struct AuthSubmit {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
}

/// Render the auth card. Returns Some when the user submits the form.
pub fn auth_panel(ui: &mut egui::Ui, form: &mut AuthForm) -> Option<AuthSubmit> {
    let mut submitted = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);

        egui::Frame::default()
            .fill(BG_SECONDARY)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(320.0);

                // Tabs
                ui.horizontal(|ui| {
                    for mode in [AuthMode::Login, AuthMode::Signup] {
                        if ui
                            .selectable_label(form.mode == mode, mode.label())
                            .clicked()
                        {
                            form.mode = mode;
                            form.clear_feedback();
                        }
                    }
                });
                ui.separator();

                ui.label(RichText::new("Username").color(TEXT_SECONDARY).small());
                ui.text_edit_singleline(&mut form.username);

                ui.add_space(4.0);

                ui.label(RichText::new("Password").color(TEXT_SECONDARY).small());
                ui.add(egui::TextEdit::singleline(&mut form.password).password(true));

                if let Some(ref error) = form.error {
                    ui.add_space(4.0);
                    ui.label(RichText::new(error).color(ERROR).small());
                }

                ui.add_space(12.0);

                let can_submit =
                    !form.submitting && !form.username.trim().is_empty() && !form.password.is_empty();
                let button_label = if form.submitting {
                    "Submitting..."
                } else {
                    form.mode.submit_label()
                };
                let button = ui.add_enabled(
                    can_submit,
                    egui::Button::new(RichText::new(button_label).color(BG_SECONDARY))
                        .fill(if can_submit { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(272.0, 32.0)),
                );

                if button.clicked() {
                    form.clear_feedback();
                    submitted = Some(AuthSubmit {
                        mode: form.mode,
                        username: form.username.trim().to_string(),
                        password: form.password.clone(),
                    });
                }
            });
    });

    submitted
}
