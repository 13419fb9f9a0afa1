//! Reshaping tables into per-subject series and back.

use serde::Serialize;

use super::table::Table;
use crate::state::Sex;

/// One observation of one subject
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    /// Row index in the source table
    pub time: u32,
    /// `None` for empty or invalid source cells
    pub value: Option<f64>,
}

/// One subject's ordered time-value sequence
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub id: String,
    pub sex: Sex,
    pub samples: Vec<Sample>,
}

impl Series {
    /// Iterate over the non-missing values
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| s.value)
    }

    /// Contiguous runs of defined samples as `[time, value]` points.
    ///
    /// A missing sample ends the current run, so lines gap instead of
    /// interpolating across it.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for sample in &self.samples {
            match sample.value {
                Some(v) => current.push([sample.time as f64, v]),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// A copy holding only samples with `start <= time <= end`
    pub fn clipped(&self, start: i64, end: i64) -> Series {
        // Samples are ordered by time, so the window is a contiguous slice
        let lo = self.samples.partition_point(|s| (s.time as i64) < start);
        let hi = self.samples.partition_point(|s| (s.time as i64) <= end);
        Series {
            id: self.id.clone(),
            sex: self.sex,
            samples: self.samples[lo..hi.max(lo)].to_vec(),
        }
    }
}

/// Turn a table into one series per column, preserving row order as time
pub fn transform(table: &Table, sex: Sex) -> Vec<Series> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(col, id)| Series {
            id: id.clone(),
            sex,
            samples: table
                .column(col)
                .into_iter()
                .enumerate()
                .map(|(row_index, value)| Sample {
                    time: row_index as u32,
                    value,
                })
                .collect(),
        })
        .collect()
}

/// Rebuild a row-per-timestamp table from series.
///
/// Rows are indexed by sample time; a series without a sample at some
/// row contributes a missing cell there.
pub fn flatten(series: &[Series]) -> Table {
    let row_count = series
        .iter()
        .filter_map(|s| s.samples.last())
        .map(|s| s.time as usize + 1)
        .max()
        .unwrap_or(0);

    let mut rows = vec![vec![None; series.len()]; row_count];
    for (col, s) in series.iter().enumerate() {
        for sample in &s.samples {
            rows[sample.time as usize][col] = sample.value;
        }
    }

    Table {
        columns: series.iter().map(|s| s.id.clone()).collect(),
        rows,
    }
}
