//! Chart inference: pick a default figure from the shape of a [`Dataset`].
//!
//! * one numeric column  → [`Histogram`]
//! * two or more         → [`ScatterMatrix`]
//! * none                → [`ChartError::NoNumericData`]

pub mod histogram;
pub mod matrix;

use thiserror::Error;

use crate::data::model::{Column, Dataset};

pub use histogram::{Bin, Histogram};
pub use matrix::{AxisRange, Panel, Scatter, ScatterMatrix};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("no numeric data to plot")]
    NoNumericData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Histogram(Histogram),
    ScatterMatrix(ScatterMatrix),
}

impl Figure {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ChartError> {
        for skipped in dataset.columns().iter().filter(|c| c.as_numeric().is_none()) {
            log::warn!("Column '{}' is not numeric, leaving it out of the plot", skipped.name);
        }

        let numeric: Vec<&Column> = dataset.numeric_columns().collect();
        let figure = match numeric.as_slice() {
            [] => return Err(ChartError::NoNumericData),
            [only] => Figure::Histogram(Histogram::new(&only.name, &only.finite_values())),
            many => Figure::ScatterMatrix(ScatterMatrix::new(many)),
        };
        log::debug!("Inferred {} over {:?}", figure.kind(), figure.columns());
        Ok(figure)
    }

    /// Column names the figure plots, in grid order.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Figure::Histogram(h) => vec![h.column.as_str()],
            Figure::ScatterMatrix(m) => m.columns.iter().map(String::as_str).collect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Histogram(_) => "histogram",
            Figure::ScatterMatrix(_) => "scatter matrix",
        }
    }
}
