//! Assistant panel — the conversation thread and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use tutor_core::workspace::WorkspaceState;
use tutor_types::chat::Who;

use crate::state::UiState;
use crate::theme::*;

/// Render the assistant panel. Returns Some(message) when the user
/// submits input.
pub fn assistant_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    workspace: &WorkspaceState,
) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("AI assistant").color(TEXT_PRIMARY).strong());
                ui.separator();

                let available_height = ui.available_height() - 48.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if workspace.chat.is_empty() && !workspace.chat_pending {
                            ui.centered_and_justified(|ui| {
                                ui.label(
                                    RichText::new(
                                        "No messages yet.\nAsk the assistant for help with your query.",
                                    )
                                    .color(TEXT_SECONDARY),
                                );
                            });
                            return;
                        }

                        for message in &workspace.chat {
                            render_bubble(ui, message.who, &message.text);
                            ui.add_space(4.0);
                        }

                        if workspace.chat_pending {
                            render_bubble(ui, Who::Ai, "Thinking...");
                        }
                    });

                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    let can_send = workspace.current_exercise.is_some() && !workspace.chat_pending;

                    let input = egui::TextEdit::singleline(&mut state.chat_input)
                        .hint_text("Ask anything")
                        .desired_width(ui.available_width() - 70.0);
                    let response = ui.add_enabled(can_send, input);

                    let has_text = !state.chat_input.trim().is_empty();
                    let send = ui.add_enabled(
                        can_send && has_text,
                        egui::Button::new(RichText::new("Send").color(BG_SECONDARY))
                            .fill(if can_send && has_text { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && can_send
                        && has_text)
                        || send.clicked()
                    {
                        submitted = Some(state.chat_input.trim().to_string());
                        state.chat_input.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_bubble(ui: &mut egui::Ui, who: Who, text: &str) {
    let (layout, fill, color) = match who {
        Who::User => (Layout::right_to_left(Align::TOP), BUBBLE_USER, BG_SECONDARY),
        Who::Ai => (Layout::left_to_right(Align::TOP), BUBBLE_AI, TEXT_PRIMARY),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.label(RichText::new(text).color(color));
            });
    });
}
