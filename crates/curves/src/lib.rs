#![deny(unsafe_code)]
//! Pillar: a field of smoothed horizontal curves warped by coherent noise.
//!
//! Rows of evenly spaced vertices are displaced by a 3D noise field sampled
//! at `(x / smoothX, y / smoothY, seed)`. Optional stages weight the warp by
//! closeness to the center, push x around with a second "river" noise
//! layer, ease the outer rows inward to round the corners, and thread
//! vertical "fabric" curves through the finished rows.
//!
//! [`generate`] is the pure generator; [`Pillar`] wraps it as a
//! [`Sketch`] that owns its parameters and regenerates on demand.

pub mod generate;
pub mod params;
pub mod presets;
pub mod shaping;

use pillar_core::color::{Srgb, StrokeStyle};
use pillar_core::curve::CurveCollection;
use pillar_core::geometry::Viewport;
use pillar_core::noise_field::NoiseField;
use pillar_core::prng::Xorshift64;
use pillar_core::Sketch;
use serde_json::Value;

pub use generate::generate;
pub use params::PillarParams;
pub use presets::builtin_presets;

/// The pillar sketch: parameters, noise field, viewport and the latest curves.
pub struct Pillar {
    params: PillarParams,
    noise: Box<dyn NoiseField>,
    viewport: Viewport,
    stroke_color: Srgb,
    curves: CurveCollection,
}

impl Pillar {
    /// Creates the sketch and generates its first collection.
    pub fn new(viewport: Viewport, noise: Box<dyn NoiseField>, params: PillarParams) -> Self {
        let mut sketch = Self {
            params,
            noise,
            viewport,
            stroke_color: Srgb::BLACK,
            curves: CurveCollection::new(),
        };
        sketch.regenerate();
        sketch
    }

    /// Creates the sketch from a JSON params object, defaults filling gaps.
    pub fn from_json(viewport: Viewport, noise: Box<dyn NoiseField>, params: &Value) -> Self {
        Self::new(viewport, noise, PillarParams::from_json(params))
    }

    /// Sets the stroke color used by [`Sketch::stroke`].
    pub fn with_stroke_color(mut self, color: Srgb) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn settings(&self) -> &PillarParams {
        &self.params
    }

    /// Replaces every parameter and regenerates.
    pub fn set_params(&mut self, params: PillarParams) {
        self.params = params;
        self.regenerate();
    }

    /// Mutates parameters in place, then regenerates once.
    pub fn update(&mut self, change: impl FnOnce(&mut PillarParams)) {
        change(&mut self.params);
        self.regenerate();
    }

    /// Draws a fresh `seed` in `[0, SEED_RANGE)` and regenerates.
    pub fn randomize(&mut self, rng: &mut Xorshift64) {
        self.params.seed = rng.next_range(0.0, params::SEED_RANGE);
        log::debug!("randomized seed to {}", self.params.seed);
        self.regenerate();
    }
}

impl Sketch for Pillar {
    fn regenerate(&mut self) {
        let normalized = self.params.normalized();
        if normalized != self.params {
            log::warn!("pillar parameters out of range; generating with clamped values");
        }
        self.curves = generate(&normalized, self.noise.as_ref(), self.viewport);
    }

    fn curves(&self) -> &CurveCollection {
        &self.curves
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn params(&self) -> Value {
        self.params.to_json()
    }

    fn param_schema(&self) -> Value {
        PillarParams::schema()
    }

    fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color,
            width: self.params.normalized().stroke_width,
        }
    }
}
