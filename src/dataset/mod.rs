//! Telemetry dataset: loading, table parsing and reshaping into series.
//!
//! The dataset is built once from four tables (male/female x
//! temperature/activity) and is read-only afterwards.

pub mod loader;
pub mod table;
pub mod transform;

use serde::Serialize;

use crate::state::{MetricType, Sex};

pub use loader::{load_dataset, DatasetPaths};
pub use table::{parse_table, Table};
pub use transform::{flatten, transform, Sample, Series};

/// Series for one metric, split by sex
#[derive(Clone, Debug, Default, Serialize)]
pub struct MetricSeries {
    pub male: Vec<Series>,
    pub female: Vec<Series>,
}

impl MetricSeries {
    pub fn for_sex(&self, sex: Sex) -> &[Series] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }
}

/// All four telemetry tables reshaped into per-subject series
#[derive(Clone, Debug, Default, Serialize)]
pub struct Dataset {
    pub temperature: MetricSeries,
    pub activity: MetricSeries,
}

impl Dataset {
    pub fn metric(&self, metric: MetricType) -> &MetricSeries {
        match metric {
            MetricType::Temperature => &self.temperature,
            MetricType::Activity => &self.activity,
        }
    }

    pub fn series(&self, metric: MetricType, sex: Sex) -> &[Series] {
        self.metric(metric).for_sex(sex)
    }

    /// Number of time rows for a metric (longest series across both sexes)
    pub fn time_len(&self, metric: MetricType) -> usize {
        let m = self.metric(metric);
        m.male
            .iter()
            .chain(m.female.iter())
            .map(|s| s.samples.len())
            .max()
            .unwrap_or(0)
    }

    pub fn series_count(&self) -> usize {
        [&self.temperature, &self.activity]
            .iter()
            .map(|m| m.male.len() + m.female.len())
            .sum()
    }
}
