//! Points and the drawing surface they live on.

use serde::{Deserialize, Serialize};

use crate::error::SketchError;

/// A point in viewport coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vertex) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn lerp(self, other: Vertex, t: f64) -> Vertex {
        Vertex::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Vertex::new(x, y)
    }
}

/// Size of the drawing surface in user units (pixels for the raster preview).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// Returns `SketchError::InvalidDimensions` unless both sides are
    /// positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, SketchError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SketchError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Center of the surface.
    pub fn center(&self) -> Vertex {
        Vertex::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Vertex::new(0.0, 10.0);
        let b = Vertex::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vertex::new(5.0, 15.0));
    }

    #[test]
    fn is_finite_rejects_nan_and_infinity() {
        assert!(Vertex::new(1.0, 2.0).is_finite());
        assert!(!Vertex::new(f64::NAN, 2.0).is_finite());
        assert!(!Vertex::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn viewport_center_is_half_size() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(vp.center(), Vertex::new(400.0, 300.0));
    }

    #[test]
    fn viewport_rejects_degenerate_sizes() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 100.0).is_err());
        assert!(Viewport::new(100.0, f64::INFINITY).is_err());
    }
}
