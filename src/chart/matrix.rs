use crate::data::model::Column;

use super::histogram::Histogram;

/// Fraction of a column's span added on each side of its axis.
pub const RANGE_PADDING: f64 = 0.05;

// ---------------------------------------------------------------------------
// Axis range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Finite extent of `values`, widened by [`RANGE_PADDING`].
    pub fn padded(values: &[f64]) -> Self {
        let (lo, hi) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if lo > hi {
            return AxisRange { min: 0.0, max: 1.0 };
        }
        let pad = if hi > lo { hi * RANGE_PADDING - lo * RANGE_PADDING } else { 0.5 };
        AxisRange {
            min: (lo - pad).max(f64::MIN),
            max: (hi + pad).min(f64::MAX),
        }
    }
}

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

/// Paired values of two columns, rows with a missing side dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub x_column: String,
    pub y_column: String,
    pub points: Vec<[f64; 2]>,
}

impl Scatter {
    pub fn new(x: &Column, y: &Column) -> Self {
        let points = match (x.as_numeric(), y.as_numeric()) {
            (Some(xs), Some(ys)) => xs
                .iter()
                .zip(ys)
                .filter_map(|pair| match pair {
                    (Some(xv), Some(yv)) if xv.is_finite() && yv.is_finite() => Some([*xv, *yv]),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Scatter {
            x_column: x.name.clone(),
            y_column: y.name.clone(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Histogram(Histogram),
    Scatter(Scatter),
}

// ---------------------------------------------------------------------------
// ScatterMatrix
// ---------------------------------------------------------------------------

/// An n×n grid over numeric columns. Cell `(row, col)` plots column `col`
/// on x against column `row` on y; the diagonal holds histograms.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterMatrix {
    pub columns: Vec<String>,
    pub ranges: Vec<AxisRange>,
    panels: Vec<Panel>,
}

impl ScatterMatrix {
    pub fn new(columns: &[&Column]) -> Self {
        let finite: Vec<Vec<f64>> = columns.iter().map(|c| c.finite_values()).collect();

        let mut panels = Vec::with_capacity(columns.len() * columns.len());
        for (row, y) in columns.iter().enumerate() {
            for (col, x) in columns.iter().enumerate() {
                if row == col {
                    panels.push(Panel::Histogram(Histogram::new(&x.name, &finite[col])));
                } else {
                    panels.push(Panel::Scatter(Scatter::new(x, y)));
                }
            }
        }

        ScatterMatrix {
            columns: columns.iter().map(|c| c.name.clone()).collect(),
            ranges: finite.iter().map(|v| AxisRange::padded(v)).collect(),
            panels,
        }
    }

    /// Number of rows (and columns) in the grid.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        if row >= self.size() || col >= self.size() {
            return None;
        }
        self.panels.get(row * self.size() + col)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}
