use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – column summary
// ---------------------------------------------------------------------------

/// Render the column summary table.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Columns");
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Name", "Type", "Count", "Range"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for summary in &state.summaries {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        let plotted = state.figure.columns().contains(&summary.name.as_str());
                        let mut text = RichText::new(&summary.name);
                        if plotted {
                            text = text.color(state.colors.color_for(&summary.name));
                        }
                        ui.label(text);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(summary.kind.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(summary.count.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        let detail = match (summary.min, summary.max, summary.distinct) {
                            (Some(min), Some(max), _) => format!("{min:.4} – {max:.4}"),
                            (_, _, Some(distinct)) => format!("{distinct} distinct"),
                            _ => "–".to_string(),
                        };
                        ui.label(detail);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(state.file_name());

        ui.separator();

        ui.label(format!(
            "{} rows × {} columns",
            state.dataset.len(),
            state.dataset.width()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_columns, "Columns")
            .clicked()
        {
            state.toggle_columns();
        }

        if matches!(state.figure, crate::chart::Figure::ScatterMatrix(_)) {
            ui.separator();
            ui.add(egui::Slider::new(&mut state.point_radius, 0.5..=6.0).text("Point size"));
        }
    });
}
