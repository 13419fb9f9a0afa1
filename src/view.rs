//! Derived view computation.
//!
//! [`compute`] turns the read-only [`Dataset`] and the current [`ViewState`]
//! into everything needed to draw one frame: the visible series, axis
//! domains, tick positions and labels. It is a pure function; nothing in
//! the dataset is modified.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::dataset::{Dataset, Series};
use crate::state::{
    MetricType, Sex, TickMode, TimeUnit, TimeWindow, ViewState, MINUTES_PER_DAY, X_TICK_TARGET,
};

/// Hours per light or dark phase
const PHASE_HOURS: i64 = 12;

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("Failed to compile regex"));

// ============================================================================
// Feature Flags
// ============================================================================

/// Optional behaviours that distinguish the chart presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Show at most this many series per sex unless a subject is highlighted
    #[serde(default)]
    pub max_series_per_sex: Option<usize>,
    /// Shade light and dark phases behind the lines in light/dark tick mode
    #[serde(default)]
    pub light_dark_shading: bool,
    /// Allow brushing a time span to get summary statistics
    #[serde(default = "default_true")]
    pub brush_stats: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Preset::Standard.flags()
    }
}

/// Named configurations of [`FeatureFlags`]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
pub enum Preset {
    /// Every series, no shading
    #[default]
    Standard,
    /// First five series per sex
    LineCapped,
    /// First five series per sex with light/dark shading
    Shaded,
}

impl Preset {
    pub fn flags(&self) -> FeatureFlags {
        match self {
            Preset::Standard => FeatureFlags {
                max_series_per_sex: None,
                light_dark_shading: false,
                brush_stats: true,
            },
            Preset::LineCapped => FeatureFlags {
                max_series_per_sex: Some(5),
                light_dark_shading: false,
                brush_stats: true,
            },
            Preset::Shaded => FeatureFlags {
                max_series_per_sex: Some(5),
                light_dark_shading: true,
                brush_stats: true,
            },
        }
    }
}

// ============================================================================
// Derived View
// ============================================================================

/// A positioned, labelled axis tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// A background band covering one light or dark phase
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhaseBand {
    pub start: f64,
    pub end: f64,
    pub light: bool,
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, Serialize)]
pub struct DerivedView {
    pub metric: MetricType,
    pub tick_mode: TickMode,
    pub time_unit: TimeUnit,
    /// Series of the visible sexes, clipped to the time window
    pub visible_series: Vec<Series>,
    /// Time window on the x axis
    pub x_domain: (f64, f64),
    /// Default window: the full index range of the data, capped by the unit
    pub extent: (f64, f64),
    /// Exact min/max over visible values; `None` when nothing is visible
    pub y_domain: Option<(f64, f64)>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub bands: Vec<PhaseBand>,
}

impl DerivedView {
    /// Y bounds for drawing, widened to whole units.
    ///
    /// A flat span (every value the same whole number) is opened up by one
    /// tick step so the plot keeps a height.
    pub fn y_axis_domain(&self) -> Option<(f64, f64)> {
        self.y_domain.map(|(lo, hi)| {
            let (lo, hi) = (lo.floor(), hi.ceil());
            if hi > lo {
                (lo, hi)
            } else {
                (lo, lo + self.metric.y_tick_step())
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.visible_series.is_empty()
    }
}

/// Compute the derived view for one redraw
pub fn compute(dataset: &Dataset, view: &ViewState, flags: &FeatureFlags) -> DerivedView {
    let extent = full_extent(dataset, view.metric, view.time_unit);
    let (start, end) = resolve_window(view.time_window, view.time_unit, extent);

    let mut visible_series = Vec::new();
    for sex in [Sex::Male, Sex::Female] {
        if !view.shows(sex) {
            continue;
        }
        let all = dataset.series(view.metric, sex);
        let cap = match (flags.max_series_per_sex, &view.highlight_id) {
            (Some(n), None) => n,
            _ => all.len(),
        };
        visible_series.extend(all.iter().take(cap).map(|s| s.clipped(start, end)));
    }

    let y_domain = value_extent(&visible_series);
    let y_ticks = match y_domain {
        Some((lo, hi)) => y_ticks(lo, hi, view.metric.y_tick_step()),
        None => Vec::new(),
    };

    let x_domain = (start as f64, end as f64);
    let x_ticks = x_ticks(x_domain, view.tick_mode, view.time_unit);

    let bands = if flags.light_dark_shading && view.tick_mode == TickMode::LightDark {
        phase_bands(x_domain)
    } else {
        Vec::new()
    };

    tracing::debug!(
        "Computed view: {} series, x {:?}, y {:?}",
        visible_series.len(),
        x_domain,
        y_domain
    );

    DerivedView {
        metric: view.metric,
        tick_mode: view.tick_mode,
        time_unit: view.time_unit,
        visible_series,
        x_domain,
        extent: (extent.0 as f64, extent.1 as f64),
        y_domain,
        x_ticks,
        y_ticks,
        bands,
    }
}

/// Full index range of a metric, capped at the unit's ceiling
pub fn full_extent(dataset: &Dataset, metric: MetricType, unit: TimeUnit) -> (i64, i64) {
    let last = dataset.time_len(metric) as i64 - 1;
    (0, last.max(1).min(unit.domain_max()))
}

/// Clamp a requested window into `[0, domain_max]`.
///
/// A window that collapses after clamping falls back to `extent`.
pub fn resolve_window(
    window: Option<TimeWindow>,
    unit: TimeUnit,
    extent: (i64, i64),
) -> (i64, i64) {
    let max = unit.domain_max();
    match window {
        Some(w) => {
            let start = w.start.clamp(0, max);
            let end = w.end.clamp(0, max);
            if start < end {
                (start, end)
            } else {
                extent
            }
        }
        None => extent,
    }
}

/// Exact min and max over every non-missing visible value
pub fn value_extent(series: &[Series]) -> Option<(f64, f64)> {
    series
        .iter()
        .flat_map(|s| s.values())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

// ============================================================================
// Time Range Parsing
// ============================================================================

/// Leading integer of a string, ignoring trailing garbage ("12abc" -> 12)
fn leading_int(text: &str) -> Option<i64> {
    LEADING_INT
        .captures(text)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

/// Parse `"start-end"` into a window.
///
/// Returns `None` for anything without a `-`, with a non-numeric bound,
/// or with `start >= end`.
pub fn parse_time_range(text: &str) -> Option<TimeWindow> {
    let text = text.trim();
    if !text.contains('-') {
        return None;
    }
    let mut parts = text.split('-');
    let start = leading_int(parts.next()?)?;
    let end = leading_int(parts.next()?)?;
    (start < end).then(|| TimeWindow::new(start, end))
}

// ============================================================================
// Ticks
// ============================================================================

/// Label for a time tick
pub fn format_tick(time: f64, tick_mode: TickMode, unit: TimeUnit) -> String {
    if tick_mode == TickMode::LightDark {
        let hour = (time.floor() as i64).rem_euclid(24);
        let phase = if hour < PHASE_HOURS { "L" } else { "D" };
        return format!("{}:00 {}", hour, phase);
    }
    if unit == TimeUnit::Day {
        let day = (time / MINUTES_PER_DAY as f64).floor() as i64 + 1;
        return format!("Day {}", day);
    }
    format!("{}", time)
}

/// Labelled x ticks across `domain`
pub fn x_ticks(domain: (f64, f64), tick_mode: TickMode, unit: TimeUnit) -> Vec<AxisTick> {
    nice_ticks(domain.0, domain.1, X_TICK_TARGET)
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: format_tick(value, tick_mode, unit),
        })
        .collect()
}

/// Y ticks from `floor(lo)` in steps of `step`, stopping before
/// `ceil(hi) + step`
pub fn y_ticks(lo: f64, hi: f64, step: f64) -> Vec<AxisTick> {
    if !(step > 0.0) || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let start = lo.floor();
    let stop = hi.ceil() + step;
    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..count)
        .map(|i| start + i as f64 * step)
        .map(|value| AxisTick {
            value,
            label: format!("{}", value),
        })
        .collect()
}

/// Round tick values (1, 2 or 5 times a power of ten) covering
/// `[start, stop]`, aiming for about `count` ticks.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };

    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = (i1 + i as i64) as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();

    if start < stop {
        ticks
    } else {
        ticks.into_iter().rev().collect()
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    const E10: f64 = 7.0710678118654755; // sqrt(50)
    const E5: f64 = 3.1622776601683795; // sqrt(10)
    const E2: f64 = std::f64::consts::SQRT_2;

    let step = (stop - start) / count;
    if !(step > 0.0) || !step.is_finite() {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powi(power as i32);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powi(-power as i32) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10f64.powi(power as i32) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1 as i64, i2 as i64, inc))
}

/// Alternating 12-hour light/dark bands across `domain`
pub fn phase_bands(domain: (f64, f64)) -> Vec<PhaseBand> {
    let (start, end) = domain;
    let mut bands = Vec::new();
    let mut hour = (start / PHASE_HOURS as f64).floor() as i64 * PHASE_HOURS;
    while (hour as f64) < end {
        bands.push(PhaseBand {
            start: (hour as f64).max(start),
            end: ((hour + PHASE_HOURS) as f64).min(end),
            light: hour.rem_euclid(24) < PHASE_HOURS,
        });
        hour += PHASE_HOURS;
    }
    bands
}
