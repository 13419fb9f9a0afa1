//! Core application state types and constants.
//!
//! This module contains the fundamental data structures used throughout
//! the application: the user-selectable view state, the enums behind each
//! control, loading state, and the colour palettes.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::dataset::Dataset;

// ============================================================================
// Constants
// ============================================================================

/// Minutes per day; rows are sampled once per minute
pub const MINUTES_PER_DAY: i64 = 1440;

/// Hard upper bound of the time axis in day mode (14 days of minutes)
pub const MAX_DAY_TIME: i64 = 14 * MINUTES_PER_DAY;

/// Hard upper bound of the time axis in second mode
pub const MAX_SECOND_TIME: i64 = 20_000;

/// Number of ticks the x axis aims for
pub const X_TICK_TARGET: usize = 14;

/// Zoom factor limits for the time axis
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 10.0;

/// Opacity applied to series that do not match the highlighted id
pub const DIMMED_OPACITY: f32 = 0.2;

/// Stroke widths
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;
pub const EMPHASIS_STROKE_WIDTH: f32 = 3.0;

/// Stroke of the highlighted series (red)
pub const HIGHLIGHT_COLOR: [u8; 3] = [255, 0, 0];

/// Stroke of the series under the pointer (orange)
pub const ACTIVE_COLOR: [u8; 3] = [255, 165, 0];

/// Sex-coded strokes used when both sexes are on screen
pub const MALE_COLOR: [u8; 3] = [31, 119, 180]; // #1f77b4
pub const FEMALE_COLOR: [u8; 3] = [227, 119, 194]; // #e377c2

/// Background shading for light and dark phases
pub const LIGHT_PHASE_COLOR: [u8; 3] = [245, 245, 245];
pub const DARK_PHASE_COLOR: [u8; 3] = [224, 224, 224];

/// Categorical palette handed out in series order (category10)
pub const CHART_COLORS: &[[u8; 3]] = &[
    [31, 119, 180],  // Blue
    [255, 127, 14],  // Orange
    [44, 160, 44],   // Green
    [214, 39, 40],   // Red
    [148, 103, 189], // Purple
    [140, 86, 75],   // Brown
    [227, 119, 194], // Pink
    [127, 127, 127], // Gray
    [188, 189, 34],  // Olive
    [23, 190, 207],  // Cyan
];

/// Colorblind-friendly palette (based on Wong's optimized palette)
/// Designed to be distinguishable for deuteranopia, protanopia, and tritanopia
pub const COLORBLIND_COLORS: &[[u8; 3]] = &[
    [0, 114, 178],   // Blue
    [230, 159, 0],   // Orange
    [0, 158, 115],   // Bluish green
    [204, 121, 167], // Reddish purple
    [86, 180, 233],  // Sky blue
    [213, 94, 0],    // Vermillion
    [240, 228, 66],  // Yellow
    [0, 0, 0],       // Black
    [136, 204, 238], // Light blue
    [153, 153, 153], // Gray
];

// ============================================================================
// Control Enums
// ============================================================================

/// Sex of a subject
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Sex {
    #[strum(to_string = "male")]
    Male,
    #[strum(to_string = "female")]
    Female,
}

/// Which measurement is plotted
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MetricType {
    #[default]
    #[strum(to_string = "temp", serialize = "temperature")]
    Temperature,
    #[strum(to_string = "act", serialize = "activity")]
    Activity,
}

impl MetricType {
    pub fn label(&self) -> &'static str {
        match self {
            MetricType::Temperature => "Temperature",
            MetricType::Activity => "Activity",
        }
    }

    /// Spacing between y-axis ticks
    pub fn y_tick_step(&self) -> f64 {
        match self {
            MetricType::Temperature => 1.0,
            MetricType::Activity => 10.0,
        }
    }
}

/// How x-axis tick labels are written
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
pub enum TickMode {
    #[default]
    #[strum(to_string = "plain")]
    Plain,
    #[strum(to_string = "lightDark", serialize = "lightdark", serialize = "light_dark")]
    LightDark,
}

impl TickMode {
    pub fn label(&self) -> &'static str {
        match self {
            TickMode::Plain => "Plain",
            TickMode::LightDark => "Light / Dark",
        }
    }
}

/// Unit of the time axis; selects the axis ceiling and label style
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeUnit {
    #[default]
    #[strum(to_string = "day", serialize = "days")]
    Day,
    #[strum(to_string = "sec", serialize = "second", serialize = "seconds")]
    Second,
}

impl TimeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Day => "Days",
            TimeUnit::Second => "Seconds",
        }
    }

    /// Largest time index the axis may show in this unit
    pub fn domain_max(&self) -> i64 {
        match self {
            TimeUnit::Day => MAX_DAY_TIME,
            TimeUnit::Second => MAX_SECOND_TIME,
        }
    }
}

// ============================================================================
// View State
// ============================================================================

/// A user-entered time window, inclusive on both ends, before clamping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// The complete set of user-selectable display parameters.
///
/// Every field is owned by exactly one control. Changes go through
/// [`crate::control::on_control_change`], which returns a new state.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub metric: MetricType,
    pub show_male: bool,
    pub show_female: bool,
    /// Subject id to emphasise; `None` when the highlight box is empty
    pub highlight_id: Option<String>,
    pub tick_mode: TickMode,
    /// Last successfully parsed window; `None` means the full range
    pub time_window: Option<TimeWindow>,
    /// Raw contents of the time-range box, kept even when it does not parse
    pub time_range_text: String,
    pub time_unit: TimeUnit,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            metric: MetricType::default(),
            show_male: true,
            show_female: true,
            highlight_id: None,
            tick_mode: TickMode::default(),
            time_window: None,
            time_range_text: String::new(),
            time_unit: TimeUnit::default(),
        }
    }
}

impl ViewState {
    /// Whether series of the given sex are drawn
    pub fn shows(&self, sex: Sex) -> bool {
        match sex {
            Sex::Male => self.show_male,
            Sex::Female => self.show_female,
        }
    }

    pub fn both_sexes_visible(&self) -> bool {
        self.show_male && self.show_female
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlight_id.as_deref() == Some(id)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Result from the background dataset load
pub enum LoadResult {
    Success(Box<Dataset>),
    Error(String),
}

/// Readiness of the dataset. Rendering only happens in `Ready`.
pub enum LoadingState {
    /// Load in flight (contains the data directory being read)
    Loading(String),
    Ready,
    /// Load failed; the chart stays empty for the rest of the session
    Failed(String),
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],    // Blue
            ToastType::Success => [113, 120, 78], // Olive green
            ToastType::Error => [135, 30, 28],    // Dark red
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        [255, 255, 255]
    }
}
