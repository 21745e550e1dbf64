use anyhow::{Result, anyhow};
use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CsvPlotApp {
    pub state: AppState,
}

impl CsvPlotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CsvPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column summary ----
        if self.state.show_columns {
            egui::SidePanel::left("columns_panel")
                .default_width(320.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &self.state);
                });
        }

        // ---- Central panel: figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &self.state);
        });
    }
}

/// Open the viewer window and block until it is closed.
pub fn show(state: AppState) -> Result<()> {
    let title = format!("csvplot – {}", state.file_name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    log::debug!("Opening window '{title}'");
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(CsvPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("failed to open plot window: {e}"))
}
