//! Analysis over brushed time spans.
//!
//! A brush is a time span picked on the chart; the statistics summarise
//! the visible series inside it.

pub mod statistics;

pub use statistics::{brush_stats, compute_descriptive_stats, BrushStats, DescriptiveStats};

/// A selected span of the time axis, inclusive on both ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub start: f64,
    pub end: f64,
}

impl Brush {
    /// Build a brush from two pointer positions in either order
    pub fn between(a: f64, b: f64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// A brush drag in progress.
///
/// Remembers the last time seen over the plot, so a drag released off the
/// plot still ends where the pointer left it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrushDrag {
    anchor: Option<f64>,
    last_x: Option<f64>,
}

impl BrushDrag {
    /// Drag started at `x`; `None` when the pointer is off the plot
    pub fn start(&mut self, x: Option<f64>) {
        self.anchor = x;
        self.last_x = x;
    }

    /// Pointer moved during the drag; returns the span so far
    pub fn update(&mut self, x: Option<f64>) -> Option<Brush> {
        if x.is_some() {
            self.last_x = x;
        }
        Some(Brush::between(self.anchor?, self.last_x?))
    }

    /// Drag released; returns the final span and resets the drag
    pub fn finish(&mut self, x: Option<f64>) -> Option<Brush> {
        let brush = self.update(x);
        *self = Self::default();
        brush
    }
}
