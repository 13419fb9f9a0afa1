//! Horizontal zoom and pan of the time axis.
//!
//! A [`ZoomTransform`] works in normalised screen units where the plot
//! spans `[0, 1]`: a point `p` is drawn at `p * scale + translate`.

use crate::state::{MAX_ZOOM, MIN_ZOOM};

/// Horizontal zoom state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub scale: f64,
    pub translate: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        scale: 1.0,
        translate: 0.0,
    };

    pub fn new(scale: f64, translate: f64) -> Self {
        Self { scale, translate }
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translate == 0.0
    }

    /// Keep the scale within the zoom limits and the view inside the extent
    pub fn constrain(self) -> Self {
        let scale = if self.scale.is_finite() {
            self.scale.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            MIN_ZOOM
        };
        let translate = if self.translate.is_finite() {
            self.translate.clamp(1.0 - scale, 0.0)
        } else {
            0.0
        };
        Self { scale, translate }
    }

    /// The part of `domain` visible under this transform
    pub fn rescale(&self, domain: (f64, f64)) -> (f64, f64) {
        let u0 = -self.translate / self.scale;
        let u1 = (1.0 - self.translate) / self.scale;
        (lerp(domain, u0), lerp(domain, u1))
    }

    /// Recover the constrained transform that shows `window` out of `domain`
    pub fn from_window(domain: (f64, f64), window: (f64, f64)) -> Self {
        let span = domain.1 - domain.0;
        let width = window.1 - window.0;
        if span <= 0.0 || width <= 0.0 {
            return Self::IDENTITY;
        }
        // Zoom about the window centre so an over-limit zoom stays in place
        let scale = (span / width).clamp(MIN_ZOOM, MAX_ZOOM);
        let centre = ((window.0 + window.1) / 2.0 - domain.0) / span;
        let u0 = centre - 0.5 / scale;
        Self::new(scale, -u0 * scale).constrain()
    }
}

/// Interpolate within `domain`; exact at both ends
fn lerp(domain: (f64, f64), u: f64) -> f64 {
    domain.0 * (1.0 - u) + domain.1 * u
}

/// Clamp a plot window to `domain`, honouring the zoom limits
pub fn clamp_window(domain: (f64, f64), window: (f64, f64)) -> (f64, f64) {
    ZoomTransform::from_window(domain, window).rescale(domain)
}
