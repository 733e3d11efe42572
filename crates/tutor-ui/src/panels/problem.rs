//! Problem description panel — title, difficulty, prose, hints, tags.

use egui::{self, RichText, ScrollArea};

use tutor_types::exercise::Exercise;

use crate::panels::catalog::difficulty_color;
use crate::theme::*;

pub fn problem_panel(ui: &mut egui::Ui, exercise: Option<&Exercise>, is_loading: bool) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            let Some(exercise) = exercise else {
                let hint = if is_loading {
                    "Loading exercise..."
                } else {
                    "Pick an exercise to get started."
                };
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(hint).color(TEXT_SECONDARY));
                });
                return;
            };

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&exercise.title).color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(exercise.difficulty.label())
                            .color(difficulty_color(exercise.difficulty))
                            .strong()
                            .small(),
                    );
                });
                ui.label(
                    RichText::new(&exercise.schema.display_name)
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                ui.separator();

                ui.label(RichText::new(&exercise.description).color(TEXT_PRIMARY));

                if !exercise.hints.is_empty() {
                    ui.add_space(8.0);
                    for hint in &exercise.hints {
                        egui::CollapsingHeader::new(format!("Hint {}", hint.level))
                            .default_open(false)
                            .show(ui, |ui| {
                                ui.label(RichText::new(&hint.text).color(TEXT_SECONDARY));
                            });
                    }
                }

                if !exercise.tags.is_empty() {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(exercise.tags.join(" · "))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                }
            });
        });
}
