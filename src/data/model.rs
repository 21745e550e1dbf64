use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// ColumnData – the typed cells of one column
// ---------------------------------------------------------------------------

/// The cells of a single column. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// Coarse column type, as shown in the column summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

impl ColumnData {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of non-missing cells.
    pub fn count(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_some()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_some()).count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    /// Numeric cells, or `None` for a text column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    /// Present, finite values in row order.
    pub fn finite_values(&self) -> Vec<f64> {
        self.as_numeric()
            .map(|cells| cells.iter().flatten().copied().filter(|v| v.is_finite()).collect())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> ColumnSummary {
        let mut summary = ColumnSummary {
            name: self.name.clone(),
            kind: self.data.kind(),
            count: self.data.count(),
            min: None,
            max: None,
            mean: None,
            distinct: None,
        };
        match &self.data {
            ColumnData::Numeric(_) => {
                let values = self.finite_values();
                if !values.is_empty() {
                    summary.min = Some(values.iter().copied().fold(f64::INFINITY, f64::min));
                    summary.max = Some(values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
                    summary.mean = Some(values.iter().sum::<f64>() / values.len() as f64);
                }
            }
            ColumnData::Text(cells) => {
                let distinct: BTreeSet<&str> = cells.iter().flatten().map(String::as_str).collect();
                summary.distinct = Some(distinct.len());
            }
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// ColumnSummary – one line of the column panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    /// Non-missing cells.
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    /// Distinct values, text columns only.
    pub distinct: Option<usize>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed table
// ---------------------------------------------------------------------------

/// A parsed CSV table: ordered, equal-length columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset from columns that all hold `n_rows` cells.
    pub fn new(columns: Vec<Column>, n_rows: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.data.len() == n_rows));
        Dataset { columns, n_rows }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Numeric columns in file order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|c| c.data.kind() == ColumnKind::Numeric)
    }

    pub fn summaries(&self) -> Vec<ColumnSummary> {
        self.columns.iter().map(Column::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec![
                Column {
                    name: "a".into(),
                    data: ColumnData::Numeric(vec![Some(1.0), None, Some(3.0), Some(f64::INFINITY)]),
                },
                Column {
                    name: "label".into(),
                    data: ColumnData::Text(vec![
                        Some("x".into()),
                        Some("y".into()),
                        None,
                        Some("x".into()),
                    ]),
                },
            ],
            4,
        )
    }

    #[test]
    fn numeric_summary_ignores_missing_and_infinite() {
        let ds = sample();
        let s = ds.column("a").unwrap().summary();
        assert_eq!(s.kind, ColumnKind::Numeric);
        assert_eq!(s.count, 3);
        assert_eq!(s.min, Some(1.0));
        assert_eq!(s.max, Some(3.0));
        assert_eq!(s.mean, Some(2.0));
        assert_eq!(s.distinct, None);
    }

    #[test]
    fn text_summary_counts_distinct() {
        let ds = sample();
        let s = ds.column("label").unwrap().summary();
        assert_eq!(s.kind, ColumnKind::Text);
        assert_eq!(s.count, 3);
        assert_eq!(s.distinct, Some(2));
        assert!(s.min.is_none());
    }

    #[test]
    fn columns_keep_file_order() {
        let ds = sample();
        let names: Vec<&str> = ds.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ds.column_names());
        assert!(ds.columns().iter().all(|c| c.data.len() == ds.len()));
    }

    #[test]
    fn numeric_columns_skip_text() {
        let ds = sample();
        let names: Vec<&str> = ds.numeric_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.width(), 2);
    }
}
