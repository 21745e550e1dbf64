use eframe::egui::{self, Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::chart::{AxisRange, Figure, Histogram, Panel, ScatterMatrix};
use crate::state::AppState;

/// Smallest edge of a scatter-matrix cell, in points.
const MIN_CELL_SIZE: f32 = 80.0;
const CELL_SPACING: f32 = 4.0;

// ---------------------------------------------------------------------------
// Figure (central panel)
// ---------------------------------------------------------------------------

/// Render the inferred figure in the central panel.
pub fn figure_plot(ui: &mut Ui, state: &AppState) {
    match &state.figure {
        Figure::Histogram(hist) => {
            let color = state.colors.color_for(&hist.column);
            Plot::new("histogram")
                .x_axis_label(hist.column.as_str())
                .y_axis_label("Frequency")
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(histogram_bars(hist, color));
                });
        }
        Figure::ScatterMatrix(matrix) => scatter_matrix(ui, state, matrix),
    }
}

fn histogram_bars(hist: &Histogram, color: Color32) -> BarChart {
    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
        .collect();
    BarChart::new(bars).color(color).name(&hist.column)
}

// ---------------------------------------------------------------------------
// Scatter matrix
// ---------------------------------------------------------------------------

fn scatter_matrix(ui: &mut Ui, state: &AppState, matrix: &ScatterMatrix) {
    let n = matrix.size();
    let available = ui.available_size();
    let cell = ((available.x.min(available.y) / n as f32) - CELL_SPACING).max(MIN_CELL_SIZE);

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("scatter_matrix")
                .spacing([CELL_SPACING, CELL_SPACING])
                .show(ui, |ui: &mut Ui| {
                    for row in 0..n {
                        for col in 0..n {
                            if let Some(panel) = matrix.panel(row, col) {
                                matrix_cell(ui, state, matrix, panel, row, col, cell);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}

fn matrix_cell(
    ui: &mut Ui,
    state: &AppState,
    matrix: &ScatterMatrix,
    panel: &Panel,
    row: usize,
    col: usize,
    size: f32,
) {
    let n = matrix.size();
    let bottom = row + 1 == n;
    let left = col == 0;

    let mut plot = Plot::new(("scatter_matrix_cell", row, col))
        .width(size)
        .height(size)
        .show_axes([bottom, left])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false);
    plot = include_range(plot, matrix.ranges[col], true);
    if bottom {
        plot = plot.x_axis_label(matrix.columns[col].as_str());
    }
    if left {
        plot = plot.y_axis_label(matrix.columns[row].as_str());
    }

    match panel {
        Panel::Histogram(hist) => {
            let color = state.colors.color_for(&hist.column);
            plot.show(ui, |plot_ui| {
                plot_ui.bar_chart(histogram_bars(hist, color));
            });
        }
        Panel::Scatter(scatter) => {
            let plot = include_range(plot, matrix.ranges[row], false);
            let color = state.colors.color_for(&scatter.x_column);
            plot.show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::new(scatter.points.clone()))
                        .radius(state.point_radius)
                        .color(color)
                        .name(format!("{} vs {}", scatter.y_column, scatter.x_column)),
                );
            });
        }
    }
}

fn include_range(plot: Plot, range: AxisRange, x_axis: bool) -> Plot {
    if x_axis {
        plot.include_x(range.min).include_x(range.max)
    } else {
        plot.include_y(range.min).include_y(range.max)
    }
}
