//! Summary statistics for brushed spans.

use serde::Serialize;

use super::Brush;
use crate::dataset::Series;

/// Basic descriptive statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Statistics for a brushed span, with the series they cover
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrushStats {
    /// Id of the single series summarised, or `None` for all visible series
    pub series_id: Option<String>,
    pub stats: DescriptiveStats,
}

impl BrushStats {
    /// Human-readable summary line
    pub fn summary(&self) -> String {
        format!(
            "Mean: {:.2}, Max: {:.2}, Min: {:.2}",
            self.stats.mean, self.stats.max, self.stats.min
        )
    }
}

/// Compute descriptive statistics for a dataset
pub fn compute_descriptive_stats(data: &[f64]) -> DescriptiveStats {
    if data.is_empty() {
        return DescriptiveStats::default();
    }

    let n = data.len();
    let mean = data.iter().sum::<f64>() / n as f64;
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    DescriptiveStats {
        count: n,
        mean,
        min,
        max,
    }
}

/// Summarise the non-missing values inside `brush`.
///
/// When `focus` names one of `series`, only that series is summarised.
/// Returns `None` if the span holds no values.
pub fn brush_stats(series: &[Series], brush: Brush, focus: Option<&str>) -> Option<BrushStats> {
    let focused = focus.filter(|id| series.iter().any(|s| s.id == *id));

    let values: Vec<f64> = series
        .iter()
        .filter(|s| focused.map_or(true, |id| s.id == id))
        .flat_map(|s| s.samples.iter())
        .filter(|sample| brush.contains(sample.time as f64))
        .filter_map(|sample| sample.value)
        .collect();

    if values.is_empty() {
        return None;
    }

    Some(BrushStats {
        series_id: focused.map(str::to_string),
        stats: compute_descriptive_stats(&values),
    })
}
