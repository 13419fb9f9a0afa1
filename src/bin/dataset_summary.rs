//! Print a JSON summary of a telemetry data directory.
//!
//! Usage: `dataset_summary <DATA_DIR> [FIELD=VALUE ...]`
//!
//! Each `FIELD=VALUE` pair is applied as a control change before the view
//! is computed, using the same field names as the chart controls, e.g.
//! `dataType=act timeMode=sec timeRange=0-500 highlightMouse=m3`.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use circaview::control::{on_control_change, ControlChange};
use circaview::dataset::{load_dataset, DatasetPaths};
use circaview::state::{MetricType, Sex, ViewState};
use circaview::view::{compute, AxisTick, FeatureFlags};

#[derive(Serialize)]
struct MetricSummary {
    metric: MetricType,
    male_series: usize,
    female_series: usize,
    time_len: usize,
}

#[derive(Serialize)]
struct ViewSummary {
    visible: Vec<String>,
    x_domain: (f64, f64),
    y_domain: Option<(f64, f64)>,
    x_ticks: Vec<AxisTick>,
    y_ticks: Vec<AxisTick>,
}

#[derive(Serialize)]
struct Summary {
    data_dir: String,
    metrics: Vec<MetricSummary>,
    view: ViewSummary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(dir) = args.next() else {
        bail!("usage: dataset_summary <DATA_DIR> [FIELD=VALUE ...]");
    };

    let mut view = ViewState::default();
    for arg in args {
        let (field, value) = arg
            .split_once('=')
            .with_context(|| format!("expected FIELD=VALUE, got '{}'", arg))?;
        let change = ControlChange::from_field(field, value)
            .with_context(|| format!("invalid control '{}'", arg))?;
        view = on_control_change(&view, change);
    }

    let dataset = load_dataset(&DatasetPaths::from_dir(&dir))
        .with_context(|| format!("failed to load dataset from {}", dir))?;

    let metrics = [MetricType::Temperature, MetricType::Activity]
        .into_iter()
        .map(|metric| MetricSummary {
            metric,
            male_series: dataset.series(metric, Sex::Male).len(),
            female_series: dataset.series(metric, Sex::Female).len(),
            time_len: dataset.time_len(metric),
        })
        .collect();

    let derived = compute(&dataset, &view, &FeatureFlags::default());
    let summary = Summary {
        data_dir: dir,
        metrics,
        view: ViewSummary {
            visible: derived.visible_series.iter().map(|s| s.id.clone()).collect(),
            x_domain: derived.x_domain,
            y_domain: derived.y_domain,
            x_ticks: derived.x_ticks,
            y_ticks: derived.y_ticks,
        },
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
