//! Mercator projection of geographic coordinates into canvas pixels.
//!
//! Follows the common web-map convention: `x = w/2 + k·(λ − λ₀)`,
//! `y = h/2 − k·(ψ(φ) − ψ(φ₀))` with `ψ(φ) = ln(tan(π/4 + φ/2))`, angles in
//! radians and `k` the scale factor. The configured center lands exactly at
//! the canvas midpoint.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 560;
/// Default projection scale factor.
pub const DEFAULT_SCALE: f64 = 140.0;
/// Default projection center (lon, lat) in degrees.
pub const DEFAULT_CENTER: (f64, f64) = (15.0, 25.0);

/// Latitude bound of the square web-Mercator world; `ψ` diverges at the poles.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// A projected position in canvas pixel coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Projection parameters shared by the base map and the tooltip positioner.
///
/// Derivation is a pure function of the inputs: the same width and height
/// always yield a bit-identical configuration, so the two consumers can never
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub scale: f64,
    /// (lon, lat) in degrees.
    pub center: (f64, f64),
    pub width: u32,
    pub height: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn psi(lat_rad: f64) -> f64 {
    (std::f64::consts::FRAC_PI_4 + lat_rad / 2.0).tan().ln()
}

impl ProjectionConfig {
    /// Configuration for a canvas of the given size, with the default scale
    /// and center.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            center: DEFAULT_CENTER,
            width,
            height,
        }
    }

    /// Project without bounds checking. Latitudes are clamped to the
    /// web-Mercator limit so polar ring vertices stay finite.
    pub fn project_raw(&self, lon: f64, lat: f64) -> ScreenPoint {
        let lam = lon.to_radians();
        let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let lam_c = self.center.0.to_radians();
        let phi_c = self.center.1.to_radians();
        ScreenPoint {
            x: f64::from(self.width) / 2.0 + self.scale * (lam - lam_c),
            y: f64::from(self.height) / 2.0 - self.scale * (psi(phi) - psi(phi_c)),
        }
    }

    /// Project into the canvas. Returns `None` when the result is non-finite
    /// or falls outside `[0, width] × [0, height]`; callers treat that as
    /// "nothing to render", never as an error.
    pub fn project(&self, lon: f64, lat: f64) -> Option<ScreenPoint> {
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }
        let p = self.project_raw(lon, lat);
        let in_bounds = p.x.is_finite()
            && p.y.is_finite()
            && (0.0..=f64::from(self.width)).contains(&p.x)
            && (0.0..=f64::from(self.height)).contains(&p.y);
        in_bounds.then_some(p)
    }

    /// Convert a projected point to percent-of-canvas coordinates, which stay
    /// valid under container resizing.
    pub fn to_percent(&self, p: ScreenPoint) -> (f64, f64) {
        (
            p.x / f64::from(self.width) * 100.0,
            p.y / f64::from(self.height) * 100.0,
        )
    }
}
