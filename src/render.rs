//! Scene construction.
//!
//! [`build_scene`] turns a [`DerivedView`] into a toolkit-independent list
//! of styled paths and labelled axes. The chart UI draws the scene as-is,
//! so a fresh scene per redraw means nothing from an earlier view state
//! can linger on screen.

use serde::Serialize;

use crate::dataset::Series;
use crate::state::{
    Sex, TickMode, TimeUnit, ViewState, ACTIVE_COLOR, CHART_COLORS, COLORBLIND_COLORS,
    DEFAULT_STROKE_WIDTH, DIMMED_OPACITY, EMPHASIS_STROKE_WIDTH, FEMALE_COLOR, HIGHLIGHT_COLOR,
    MALE_COLOR,
};
use crate::view::{x_ticks, AxisTick, DerivedView, PhaseBand};
use crate::zoom::ZoomTransform;

/// Categorical palette used when series are not sex-coded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Category10,
    ColorBlind,
}

impl Palette {
    pub fn from_color_blind_mode(color_blind_mode: bool) -> Self {
        if color_blind_mode {
            Palette::ColorBlind
        } else {
            Palette::Category10
        }
    }

    fn colors(&self) -> &'static [[u8; 3]] {
        match self {
            Palette::Category10 => CHART_COLORS,
            Palette::ColorBlind => COLORBLIND_COLORS,
        }
    }

    /// Colour for the series at `slot` in its sex's ordered series list.
    ///
    /// Slots are handed out in order, so the first ten subjects of a sex
    /// never share a colour.
    pub fn color_at(&self, slot: usize) -> [u8; 3] {
        let colors = self.colors();
        colors[slot % colors.len()]
    }
}

/// One drawn line
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathSpec {
    pub id: String,
    pub sex: Sex,
    pub stroke: [u8; 3],
    pub width: f32,
    pub opacity: f32,
    pub highlighted: bool,
    /// Runs of defined samples; the line breaks between runs
    pub segments: Vec<Vec<[f64; 2]>>,
}

/// Everything the chart draws for one view state
#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    pub tick_mode: TickMode,
    pub time_unit: TimeUnit,
    pub x_domain: (f64, f64),
    /// Unzoomed x domain; zoom and pan stay inside it
    pub base_domain: (f64, f64),
    /// Whole-unit y bounds; `None` for an empty plot
    pub y_bounds: Option<(f64, f64)>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub bands: Vec<PhaseBand>,
    /// Drawn in order; a highlighted path comes last so it sits on top
    pub paths: Vec<PathSpec>,
}

impl Scene {
    pub fn path(&self, id: &str) -> Option<&PathSpec> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Zoom update: new x domain and tick labels, paths untouched
    pub fn rescale_x(&mut self, domain: (f64, f64)) {
        self.x_domain = domain;
        self.x_ticks = x_ticks(domain, self.tick_mode, self.time_unit);
    }

    /// Zoom to `window`, constrained to the zoom limits and the base domain.
    ///
    /// Returns the transform that was applied.
    pub fn zoom_to(&mut self, window: (f64, f64)) -> ZoomTransform {
        let transform = ZoomTransform::from_window(self.base_domain, window);
        let domain = transform.rescale(self.base_domain);
        if domain != self.x_domain {
            self.rescale_x(domain);
        }
        transform
    }
}

/// Stroke colour for a series under the current view state.
///
/// `slot` is the series' position among the series of its sex.
pub fn stroke_for(series: &Series, slot: usize, view: &ViewState, palette: Palette) -> [u8; 3] {
    if view.is_highlighted(&series.id) {
        HIGHLIGHT_COLOR
    } else if view.both_sexes_visible() {
        match series.sex {
            Sex::Male => MALE_COLOR,
            Sex::Female => FEMALE_COLOR,
        }
    } else {
        palette.color_at(slot)
    }
}

pub fn opacity_for(series: &Series, view: &ViewState) -> f32 {
    match &view.highlight_id {
        Some(id) if *id != series.id => DIMMED_OPACITY,
        _ => 1.0,
    }
}

pub fn width_for(series: &Series, view: &ViewState) -> f32 {
    if view.is_highlighted(&series.id) {
        EMPHASIS_STROKE_WIDTH
    } else {
        DEFAULT_STROKE_WIDTH
    }
}

/// Build a complete scene from a derived view
pub fn build_scene(derived: &DerivedView, view: &ViewState, palette: Palette) -> Scene {
    // Visible series of a sex are a prefix of the dataset's list for that
    // sex, so counting per sex reproduces each series' dataset position
    let (mut male_slot, mut female_slot) = (0usize, 0usize);
    let (mut paths, highlighted): (Vec<PathSpec>, Vec<PathSpec>) = derived
        .visible_series
        .iter()
        .map(|series| {
            let counter = match series.sex {
                Sex::Male => &mut male_slot,
                Sex::Female => &mut female_slot,
            };
            let slot = *counter;
            *counter += 1;
            PathSpec {
                id: series.id.clone(),
                sex: series.sex,
                stroke: stroke_for(series, slot, view, palette),
                width: width_for(series, view),
                opacity: opacity_for(series, view),
                highlighted: view.is_highlighted(&series.id),
                segments: series.segments(),
            }
        })
        .partition(|p| !p.highlighted);
    paths.extend(highlighted);

    Scene {
        tick_mode: derived.tick_mode,
        time_unit: derived.time_unit,
        x_domain: derived.x_domain,
        base_domain: derived.x_domain,
        y_bounds: derived.y_axis_domain(),
        x_ticks: derived.x_ticks.clone(),
        y_ticks: derived.y_ticks.clone(),
        bands: derived.bands.clone(),
        paths,
    }
}

// ============================================================================
// Hover
// ============================================================================

/// Pointer interaction with the drawn paths
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    /// Id of the path under the pointer
    pub active: Option<String>,
    /// Pointer position in plot coordinates
    pub pointer: Option<[f64; 2]>,
}

impl HoverState {
    /// Pointer entered or moved over the plot
    pub fn enter(&mut self, id: Option<String>, pointer: [f64; 2]) {
        self.active = id;
        self.pointer = Some(pointer);
    }

    /// Pointer left the plot
    pub fn leave(&mut self) {
        self.active = None;
        self.pointer = None;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

/// Colour and width a path is drawn with, accounting for hover
pub fn effective_style(path: &PathSpec, hover: &HoverState) -> ([u8; 3], f32) {
    if hover.is_active(&path.id) {
        (ACTIVE_COLOR, EMPHASIS_STROKE_WIDTH)
    } else {
        (path.stroke, path.width)
    }
}

/// Floating label shown next to the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub at: [f64; 2],
}

pub fn tooltip(hover: &HoverState) -> Option<Tooltip> {
    match (&hover.active, hover.pointer) {
        (Some(id), Some(at)) => Some(Tooltip {
            text: format!("Mouse: {}", id),
            at,
        }),
        _ => None,
    }
}

/// Id of the path passing closest to `point` vertically, within
/// `y_tolerance` plot units
pub fn nearest_series(scene: &Scene, point: [f64; 2], y_tolerance: f64) -> Option<&str> {
    let [px, py] = point;
    let mut best: Option<(&str, f64)> = None;

    for path in &scene.paths {
        for segment in &path.segments {
            let Some(y) = interpolate(segment, px) else {
                continue;
            };
            let distance = (y - py).abs();
            if distance <= y_tolerance && best.map_or(true, |(_, d)| distance <= d) {
                best = Some((path.id.as_str(), distance));
            }
        }
    }

    best.map(|(id, _)| id)
}

/// Y value of a segment at `x`, or `None` outside the segment
fn interpolate(segment: &[[f64; 2]], x: f64) -> Option<f64> {
    let first = segment.first()?;
    let last = segment.last()?;
    if x < first[0] || x > last[0] {
        return None;
    }
    let idx = segment.partition_point(|p| p[0] < x);
    if idx == 0 {
        return Some(first[1]);
    }
    let [x1, y1] = segment[idx];
    let [x0, y0] = segment[idx - 1];
    if x1 == x0 {
        return Some(y1);
    }
    Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
}
