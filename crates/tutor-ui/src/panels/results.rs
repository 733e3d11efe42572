//! Result panel — execution output and the latest grading verdict.

use egui::{self, RichText, ScrollArea};
use serde_json::Value;

use tutor_types::result::{QueryResult, SubmitResult};

use crate::theme::*;

pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn results_panel(
    ui: &mut egui::Ui,
    query_result: Option<&QueryResult>,
    submit_result: Option<&SubmitResult>,
) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                if let Some(submit) = submit_result {
                    render_verdict(ui, submit);
                    ui.separator();
                }

                match query_result.or(submit_result.map(|s| &s.user_result)) {
                    Some(result) => render_query_result(ui, result),
                    None => {
                        ui.label(
                            RichText::new("Run your query to see results.")
                                .color(TEXT_SECONDARY),
                        );
                    }
                }
            });
        });
}

fn render_verdict(ui: &mut egui::Ui, submit: &SubmitResult) {
    let (label, color) = if submit.correct {
        ("Correct", SUCCESS)
    } else {
        ("Not quite", ERROR)
    };
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(color).strong());
        ui.label(RichText::new(&submit.message).color(TEXT_PRIMARY));
    });
}

fn render_query_result(ui: &mut egui::Ui, result: &QueryResult) {
    // The transport can carry rows and an error at once; the error wins.
    if let Some(ref error) = result.error {
        ui.label(RichText::new(error).color(ERROR).monospace());
        return;
    }

    ui.label(
        RichText::new(format!(
            "{} rows in {} ms",
            result.row_count, result.execution_time
        ))
        .color(TEXT_SECONDARY)
        .small(),
    );

    egui::Grid::new("result_grid")
        .striped(true)
        .min_col_width(60.0)
        .show(ui, |ui| {
            for column in &result.columns {
                ui.label(RichText::new(column).color(TEXT_PRIMARY).strong().small());
            }
            ui.end_row();

            for row in &result.rows {
                for cell in row {
                    ui.label(RichText::new(cell_text(cell)).color(TEXT_PRIMARY).small());
                }
                ui.end_row();
            }
        });
}
