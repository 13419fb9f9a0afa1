//! Tests for loading a data directory

use circaview::dataset::{load_dataset, DatasetPaths};
use circaview::error::LoadError;
use circaview::state::{MetricType, Sex};

use crate::common::{temp_data_dir, write_csv, write_dataset};

#[test]
fn test_load_complete_directory() {
    let dir = temp_data_dir("complete");
    write_dataset(&dir);

    let dataset = load_dataset(&DatasetPaths::from_dir(&dir)).expect("dataset loads");
    assert_eq!(dataset.series_count(), 7);
    assert_eq!(dataset.time_len(MetricType::Temperature), 3);
    assert_eq!(dataset.time_len(MetricType::Activity), 3);

    let males = dataset.series(MetricType::Temperature, Sex::Male);
    assert_eq!(males.len(), 2);
    assert_eq!(males[1].id, "m2");
    assert_eq!(males[1].samples[1].value, None);

    let females = dataset.series(MetricType::Activity, Sex::Female);
    assert!(females.iter().all(|s| s.sex == Sex::Female));
    assert_eq!(females[0].samples[1].value, None);
    assert_eq!(females[1].id, "f2");
    assert_eq!(dataset.series(MetricType::Temperature, Sex::Female).len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_fails_whole_load() {
    let dir = temp_data_dir("missing");
    write_dataset(&dir);
    std::fs::remove_file(dir.join("FemAct.csv")).expect("remove FemAct.csv");

    match load_dataset(&DatasetPaths::from_dir(&dir)) {
        Err(LoadError::Io { path, .. }) => assert!(path.ends_with("FemAct.csv")),
        other => panic!("expected an I/O error, got {:?}", other.map(|d| d.series_count())),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_table_fails_whole_load() {
    let dir = temp_data_dir("empty");
    write_dataset(&dir);
    write_csv(&dir, "FemTemp.csv", "");

    match load_dataset(&DatasetPaths::from_dir(&dir)) {
        Err(LoadError::EmptyTable { path }) => assert!(path.ends_with("FemTemp.csv")),
        other => panic!("expected an empty-table error, got {:?}", other.map(|d| d.series_count())),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_error_message_names_the_file() {
    let dir = temp_data_dir("message");
    let err = load_dataset(&DatasetPaths::from_dir(&dir)).expect_err("nothing to load");
    assert!(err.to_string().contains(".csv"), "message: {}", err);
    let _ = std::fs::remove_dir_all(&dir);
}
