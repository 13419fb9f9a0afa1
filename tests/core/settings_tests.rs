//! Tests for settings persistence and presets

use std::path::{Path, PathBuf};

use circaview::settings::AppSettings;
use circaview::state::{MetricType, TickMode, TimeUnit};
use circaview::view::{FeatureFlags, Preset};

#[test]
fn test_defaults() {
    let settings = AppSettings::default();
    assert_eq!(settings.data_dir, PathBuf::from("data"));
    assert_eq!(settings.preset, Preset::Standard);
    assert_eq!(settings.feature_flags(), FeatureFlags::default());
    assert!(!settings.color_blind_mode);

    let view = settings.initial_view_state();
    assert!(view.show_male && view.show_female);
    assert_eq!(view.highlight_id, None);
    assert_eq!(view.time_window, None);
}

#[test]
fn test_round_trip_through_json() {
    let settings = AppSettings {
        data_dir: PathBuf::from("/srv/telemetry"),
        preset: Preset::Shaded,
        color_blind_mode: true,
        metric: MetricType::Activity,
        time_unit: TimeUnit::Second,
        tick_mode: TickMode::LightDark,
        ..AppSettings::default()
    };
    let json = serde_json::to_string(&settings).expect("settings serialize");
    assert_eq!(AppSettings::from_json(&json), settings);
}

#[test]
fn test_initial_view_follows_settings() {
    let settings = AppSettings::from_json(
        r#"{"metric": "Activity", "time_unit": "Second", "tick_mode": "LightDark"}"#,
    );
    let view = settings.initial_view_state();
    assert_eq!(view.metric, MetricType::Activity);
    assert_eq!(view.time_unit, TimeUnit::Second);
    assert_eq!(view.tick_mode, TickMode::LightDark);
}

#[test]
fn test_presets() {
    let shaded = AppSettings::from_json(r#"{"preset": "Shaded"}"#).feature_flags();
    assert_eq!(shaded.max_series_per_sex, Some(5));
    assert!(shaded.light_dark_shading);

    let capped = Preset::LineCapped.flags();
    assert_eq!(capped.max_series_per_sex, Some(5));
    assert!(!capped.light_dark_shading);

    let standard = Preset::Standard.flags();
    assert_eq!(standard.max_series_per_sex, None);
    assert!(standard.brush_stats);
}

#[test]
fn test_dataset_paths_follow_data_dir() {
    let settings = AppSettings::from_json(r#"{"data_dir": "lab"}"#);
    let paths = settings.dataset_paths();
    assert_eq!(paths.male_temperature, Path::new("lab/MaleTemp.csv"));
    assert_eq!(paths.female_temperature, Path::new("lab/FemTemp.csv"));
    assert_eq!(paths.male_activity, Path::new("lab/MaleAct.csv"));
    assert_eq!(paths.female_activity, Path::new("lab/FemAct.csv"));
}
