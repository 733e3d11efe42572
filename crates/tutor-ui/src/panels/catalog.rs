//! Exercise picker — a modal listing the catalog, filterable by
//! difficulty.

use egui::{self, RichText, ScrollArea};

use tutor_core::workspace::WorkspaceState;
use tutor_types::exercise::Difficulty;

use crate::state::UiState;
use crate::theme::*;

pub fn difficulty_color(difficulty: Difficulty) -> egui::Color32 {
    match difficulty {
        Difficulty::Easy => SUCCESS,
        Difficulty::Medium => WARNING,
        Difficulty::Hard => ERROR,
    }
}

/// Render the catalog window. Returns the id of a clicked exercise.
pub fn catalog_window(
    ctx: &egui::Context,
    state: &mut UiState,
    workspace: &WorkspaceState,
) -> Option<i64> {
    let mut picked = None;
    let difficulty = &mut state.catalog_difficulty;

    egui::Window::new("Exercises")
        .open(&mut state.show_catalog)
        .collapsible(false)
        .resizable(true)
        .default_size([420.0, 480.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Difficulty").color(TEXT_SECONDARY).small());
                if ui.selectable_label(difficulty.is_none(), "All").clicked() {
                    *difficulty = None;
                }
                for option in Difficulty::all() {
                    let selected = *difficulty == Some(*option);
                    if ui.selectable_label(selected, option.label()).clicked() {
                        *difficulty = if selected { None } else { Some(*option) };
                    }
                }
            });
            ui.separator();

            if workspace.exercises.is_empty() {
                ui.label(RichText::new("No exercises loaded yet.").color(TEXT_SECONDARY));
                return;
            }

            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                let shown = workspace
                    .exercises
                    .iter()
                    .filter(|e| difficulty.map_or(true, |d| e.difficulty == d));
                for exercise in shown {
                    let selected = workspace.selected_exercise_id == Some(exercise.id);
                    egui::Frame::default()
                        .fill(if selected { BG_SURFACE } else { BG_SECONDARY })
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                let title = ui.selectable_label(
                                    selected,
                                    RichText::new(&exercise.title).color(TEXT_PRIMARY).strong(),
                                );
                                if title.clicked() {
                                    picked = Some(exercise.id);
                                }
                                ui.label(
                                    RichText::new(exercise.difficulty.label())
                                        .color(difficulty_color(exercise.difficulty))
                                        .small(),
                                );
                            });
                            if !exercise.tags.is_empty() {
                                ui.label(
                                    RichText::new(exercise.tags.join(" · "))
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            }
                        });
                    ui.add_space(4.0);
                }
            });
        });

    picked
}
