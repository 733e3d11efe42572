//! Query editor panel — the buffer plus Run and Submit.
//!
//! The buffer itself is a plain monospace text area; syntax highlighting
//! belongs to a dedicated editor widget, not this layer.

use egui::{self, RichText, Vec2};

use crate::theme::*;

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Run,
    Submit,
}

pub fn editor_panel(
    ui: &mut egui::Ui,
    code: &mut String,
    has_exercise: bool,
    busy: bool,
) -> Option<EditorAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let editor_height = ui.available_height() - 40.0;
                egui::ScrollArea::vertical()
                    .max_height(editor_height)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_sized(
                            Vec2::new(ui.available_width(), editor_height),
                            egui::TextEdit::multiline(code)
                                .code_editor()
                                .hint_text("Write your SQL here..."),
                        );
                    });

                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    let enabled = has_exercise && !busy;
                    let run = ui.add_enabled(
                        enabled,
                        egui::Button::new(RichText::new("Run").color(BG_SECONDARY))
                            .fill(if enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(72.0, 26.0)),
                    );
                    if run.clicked() {
                        action = Some(EditorAction::Run);
                    }

                    let submit = ui.add_enabled(
                        enabled,
                        egui::Button::new(RichText::new("Submit").color(BG_SECONDARY))
                            .fill(if enabled { SUCCESS } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(72.0, 26.0)),
                    );
                    if submit.clicked() {
                        action = Some(EditorAction::Submit);
                    }

                    if busy {
                        ui.label(RichText::new("Working...").color(TEXT_SECONDARY).small());
                    }
                });
            });
        });

    action
}
