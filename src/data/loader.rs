use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Column, ColumnData, Dataset};

/// Cell spellings read as missing values.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a headered, comma-separated file into a [`Dataset`].
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse CSV text from any reader.
///
/// The first row names the columns. Rows shorter than the header are padded
/// with missing cells; longer rows are rejected.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let raw_headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if raw_headers.is_empty() {
        bail!("no columns to parse from file");
    }
    let headers = clean_headers(raw_headers);
    let width = headers.len();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    let mut n_rows = 0;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if is_blank_line(&record) {
            continue;
        }
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(row_no as u64 + 2);
            bail!("expected {width} fields in line {line}, saw {}", record.len());
        }
        for (col_idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(col_idx).and_then(non_missing));
        }
        n_rows += 1;
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column {
            name,
            data: infer_column(raw, n_rows),
        })
        .collect();

    Ok(Dataset::new(columns, n_rows))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A line holding nothing but whitespace reads as a single blank field.
fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|f| f.trim().is_empty())
}

fn non_missing(cell: &str) -> Option<String> {
    if NA_TOKENS.contains(&cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Name empty headers `Unnamed: i` and suffix repeats with `.1`, `.2`, ...
fn clean_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(raw.len());

    for (i, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {i}")
        } else {
            header
        };
        let mut name = base.clone();
        if let Some(&used) = seen.get(&base) {
            // `base.N` may itself have been taken by an explicit header.
            let mut n = used;
            loop {
                n += 1;
                name = format!("{base}.{n}");
                if !seen.contains_key(&name) {
                    break;
                }
            }
            seen.insert(base, n);
        }
        seen.insert(name.clone(), 0);
        out.push(name);
    }
    out
}

/// A column is numeric when every present cell parses as `f64`.
fn infer_column(raw: Vec<Option<String>>, n_rows: usize) -> ColumnData {
    if n_rows == 0 {
        return ColumnData::Text(raw);
    }
    let parsed: Option<Vec<Option<f64>>> = raw
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(s) => s.trim().parse::<f64>().ok().map(Some),
        })
        .collect();

    match parsed {
        Some(values) => ColumnData::Numeric(values),
        None => ColumnData::Text(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ColumnKind;

    #[test]
    fn infers_numeric_and_text_columns() {
        let ds = read_csv("a,b,name\n1,2.5,x\n3,-4e2,y\n".as_bytes()).unwrap();
        assert_eq!(ds.column_names(), vec!["a", "b", "name"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.column("b").unwrap().data,
            ColumnData::Numeric(vec![Some(2.5), Some(-400.0)])
        );
        assert_eq!(ds.column("name").unwrap().data.kind(), ColumnKind::Text);
    }

    #[test]
    fn na_tokens_are_missing() {
        let ds = read_csv("a,b\n1,NA\n,2\nnull,n/a\n".as_bytes()).unwrap();
        assert_eq!(
            ds.column("a").unwrap().data,
            ColumnData::Numeric(vec![Some(1.0), None, None])
        );
        assert_eq!(
            ds.column("b").unwrap().data,
            ColumnData::Numeric(vec![None, Some(2.0), None])
        );
    }

    #[test]
    fn all_missing_column_is_numeric() {
        let ds = read_csv("a,b\n1,\n2,\n".as_bytes()).unwrap();
        assert_eq!(ds.column("b").unwrap().data.kind(), ColumnKind::Numeric);
    }

    #[test]
    fn header_only_file_has_text_columns() {
        let ds = read_csv("a,b\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.width(), 2);
        assert!(ds.numeric_columns().next().is_none());
    }

    #[test]
    fn numeric_cells_tolerate_surrounding_spaces() {
        let ds = read_csv("a,b\n 1 ,2\n".as_bytes()).unwrap();
        assert_eq!(ds.column("a").unwrap().data, ColumnData::Numeric(vec![Some(1.0)]));
    }

    #[test]
    fn booleans_stay_text() {
        let ds = read_csv("flag\ntrue\nfalse\n".as_bytes()).unwrap();
        assert_eq!(ds.column("flag").unwrap().data.kind(), ColumnKind::Text);
    }

    #[test]
    fn short_rows_are_padded() {
        let ds = read_csv("a,b,c\n1,2,3\n4\n".as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.column("c").unwrap().data,
            ColumnData::Numeric(vec![Some(3.0), None])
        );
    }

    #[test]
    fn long_rows_are_rejected() {
        let err = read_csv("a,b\n1,2\n3,4,5\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("expected 2 fields in line 3, saw 3"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(read_csv("".as_bytes()).is_err());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let ds = read_csv("a\n1\n\n2\n".as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        let ds = read_csv("v\n1\n2\n  \n".as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column("v").unwrap().data, ColumnData::Numeric(vec![Some(1.0), Some(2.0)]));

        let ds = read_csv("a,b\n1,2\n\t\n3,4\n".as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column("b").unwrap().data.kind(), ColumnKind::Numeric);
    }

    #[test]
    fn empty_fields_row_is_kept() {
        let ds = read_csv("a,b\n1,2\n,\n".as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column("a").unwrap().data, ColumnData::Numeric(vec![Some(1.0), None]));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let ds = read_csv("name,v\n\"Smith, J\",1\n".as_bytes()).unwrap();
        assert_eq!(
            ds.column("name").unwrap().data,
            ColumnData::Text(vec![Some("Smith, J".to_string())])
        );
    }

    #[test]
    fn headers_are_cleaned() {
        let names = clean_headers(
            ["a", "", "a", "b", "a", "a.1"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert_eq!(names, vec!["a", "Unnamed: 1", "a.1", "b", "a.2", "a.1.1"]);
    }
}
