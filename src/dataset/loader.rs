//! Parallel, all-or-nothing loading of the four telemetry tables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use super::table::parse_table;
use super::transform::{transform, Series};
use super::{Dataset, MetricSeries};
use crate::error::LoadError;
use crate::state::{MetricType, Sex};

/// Conventional file names inside a data directory
pub const MALE_TEMPERATURE_FILE: &str = "MaleTemp.csv";
pub const FEMALE_TEMPERATURE_FILE: &str = "FemTemp.csv";
pub const MALE_ACTIVITY_FILE: &str = "MaleAct.csv";
pub const FEMALE_ACTIVITY_FILE: &str = "FemAct.csv";

/// Locations of the four source tables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetPaths {
    pub male_temperature: PathBuf,
    pub female_temperature: PathBuf,
    pub male_activity: PathBuf,
    pub female_activity: PathBuf,
}

impl DatasetPaths {
    /// Paths using the conventional file names inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            male_temperature: dir.join(MALE_TEMPERATURE_FILE),
            female_temperature: dir.join(FEMALE_TEMPERATURE_FILE),
            male_activity: dir.join(MALE_ACTIVITY_FILE),
            female_activity: dir.join(FEMALE_ACTIVITY_FILE),
        }
    }

    fn jobs(&self) -> [(MetricType, Sex, &Path); 4] {
        [
            (MetricType::Temperature, Sex::Male, &self.male_temperature),
            (MetricType::Temperature, Sex::Female, &self.female_temperature),
            (MetricType::Activity, Sex::Male, &self.male_activity),
            (MetricType::Activity, Sex::Female, &self.female_activity),
        ]
    }
}

/// Read and reshape a single table
pub fn load_series(path: &Path, sex: Sex) -> Result<Vec<Series>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&contents).map_err(|e| e.with_path(path))?;

    tracing::debug!(
        "Parsed {}: {} subjects x {} rows",
        path.display(),
        table.column_count(),
        table.row_count()
    );

    Ok(transform(&table, sex))
}

/// Load all four tables in parallel.
///
/// Fails as a whole if any table fails; a partially populated dataset
/// is never returned.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset, LoadError> {
    let start = Instant::now();

    let loaded: Vec<(MetricType, Sex, Vec<Series>)> = paths
        .jobs()
        .into_par_iter()
        .map(|(metric, sex, path)| load_series(path, sex).map(|series| (metric, sex, series)))
        .collect::<Result<_, _>>()?;

    let mut temperature = MetricSeries::default();
    let mut activity = MetricSeries::default();
    for (metric, sex, series) in loaded {
        let target = match metric {
            MetricType::Temperature => &mut temperature,
            MetricType::Activity => &mut activity,
        };
        match sex {
            Sex::Male => target.male = series,
            Sex::Female => target.female = series,
        }
    }

    let dataset = Dataset {
        temperature,
        activity,
    };

    tracing::info!(
        "Loaded {} series in {:.1?}",
        dataset.series_count(),
        start.elapsed()
    );

    Ok(dataset)
}
