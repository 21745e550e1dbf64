use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::chart::Figure;
use crate::color::ColumnColors;
use crate::data::loader::load_csv;
use crate::data::model::{ColumnSummary, Dataset};

/// Default scatter point radius, in points.
pub const DEFAULT_POINT_RADIUS: f32 = 2.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the viewer shows, independent of rendering.
#[derive(Debug)]
pub struct AppState {
    /// File the dataset was read from.
    pub source: PathBuf,

    pub dataset: Dataset,

    /// Figure inferred from the dataset's numeric columns.
    pub figure: Figure,

    /// Per-column summary rows for the side panel.
    pub summaries: Vec<ColumnSummary>,

    /// Colour of each plotted column.
    pub colors: ColumnColors,

    /// Whether the column summary panel is open.
    pub show_columns: bool,

    pub point_radius: f32,
}

impl AppState {
    /// Read `path` and infer its figure.
    pub fn load(path: &Path) -> Result<Self> {
        let dataset = load_csv(path)?;
        log::info!(
            "Loaded {} rows with columns {:?}",
            dataset.len(),
            dataset.column_names()
        );
        Self::from_dataset(path, dataset)
    }

    pub fn from_dataset(source: &Path, dataset: Dataset) -> Result<Self> {
        let figure = Figure::from_dataset(&dataset)
            .with_context(|| format!("plotting {}", source.display()))?;
        let colors = ColumnColors::new(figure.columns().as_slice());
        let summaries = dataset.summaries();

        Ok(AppState {
            source: source.to_path_buf(),
            dataset,
            figure,
            summaries,
            colors,
            show_columns: true,
            point_radius: DEFAULT_POINT_RADIUS,
        })
    }

    /// File name shown in the window title and top bar.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn toggle_columns(&mut self) {
        self.show_columns = !self.show_columns;
    }
}
