//! Row-per-timestamp table parsing.
//!
//! Each telemetry file is a plain CSV: a header of subject ids followed by
//! one row per minute. Cells that are empty, non-numeric or NaN are kept
//! as missing values rather than rejected.

use serde::Serialize;

use crate::error::LoadError;

/// A parsed telemetry table
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    /// Subject ids, in header order
    pub columns: Vec<String>,
    /// One row per time index; every row has `columns.len()` cells
    pub rows: Vec<Vec<Option<f64>>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get data for a column by index; `None` cells stay `None`
    pub fn column(&self, column_index: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(column_index).copied().flatten())
            .collect()
    }
}

/// Parse a single cell. NaN is treated the same as an empty cell.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let cell = unquote(cell.trim());
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}

/// Parse CSV text into a [`Table`].
///
/// The first non-empty line is the header. Short rows are padded with
/// missing cells and extra trailing cells are dropped.
pub fn parse_table(contents: &str) -> Result<Table, LoadError> {
    let mut lines = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or_else(|| LoadError::EmptyTable {
        path: Default::default(),
    })?;

    let header = header.trim_start_matches('\u{feff}');
    let columns: Vec<String> = header
        .split(',')
        .map(|name| unquote(name.trim()).to_string())
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::EmptyTable {
            path: Default::default(),
        });
    }

    let width = columns.len();
    let mut ragged = 0usize;
    let rows: Vec<Vec<Option<f64>>> = lines
        .map(|line| {
            let mut row: Vec<Option<f64>> = line.split(',').take(width).map(parse_cell).collect();
            if row.len() < width {
                ragged += 1;
                row.resize(width, None);
            }
            row
        })
        .collect();

    if ragged > 0 {
        tracing::warn!("Padded {} short rows with missing values", ragged);
    }

    Ok(Table { columns, rows })
}
