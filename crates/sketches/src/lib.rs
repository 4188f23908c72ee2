#![deny(unsafe_code)]
//! Sketch registry plus the output side: SVG export, provenance filenames,
//! CPU rasterization and PNG snapshots.
//!
//! Sits between `pillar-core` (the `Sketch` trait) and the generator crates
//! so the CLI does not duplicate name dispatch or export logic.

pub mod raster;
pub mod svg;

#[cfg(feature = "png")]
pub mod snapshot;

use pillar_core::curve::CurveCollection;
use pillar_core::error::SketchError;
use pillar_core::geometry::Viewport;
use pillar_core::noise_field::noise_from_name;
use pillar_core::preset::PresetBook;
use pillar_core::{Sketch, Srgb, StrokeStyle};
use serde_json::Value;

/// All available sketch names.
const SKETCH_NAMES: &[&str] = &["pillar"];

/// Every sketch this build knows, behind one `Sketch` implementation.
pub enum SketchKind {
    /// Noise-warped pillar lines.
    Pillar(pillar_curves::Pillar),
}

impl SketchKind {
    /// Constructs a sketch by name.
    ///
    /// `noise` names the noise field (`"simplex"` or `"perlin"`), seeded with
    /// `noise_seed`. Returns `SketchError::UnknownSketch` or
    /// `SketchError::UnknownNoise` for unrecognized names.
    pub fn from_name(
        name: &str,
        viewport: Viewport,
        noise: &str,
        noise_seed: u32,
        params: &Value,
    ) -> Result<Self, SketchError> {
        match name {
            "pillar" => {
                let field = noise_from_name(noise, noise_seed)?;
                Ok(SketchKind::Pillar(pillar_curves::Pillar::from_json(
                    viewport, field, params,
                )))
            }
            _ => Err(SketchError::UnknownSketch(name.to_string())),
        }
    }

    /// Built-in presets of the named sketch.
    pub fn presets(name: &str) -> Result<PresetBook, SketchError> {
        match name {
            "pillar" => Ok(pillar_curves::builtin_presets()),
            _ => Err(SketchError::UnknownSketch(name.to_string())),
        }
    }

    /// Parameter schema of the named sketch, without building it.
    pub fn schema(name: &str) -> Result<Value, SketchError> {
        match name {
            "pillar" => Ok(pillar_curves::PillarParams::schema()),
            _ => Err(SketchError::UnknownSketch(name.to_string())),
        }
    }

    /// Recognized sketch names.
    pub fn list_sketches() -> &'static [&'static str] {
        SKETCH_NAMES
    }

    /// Sets the stroke color reported by [`Sketch::stroke`].
    pub fn with_stroke_color(self, color: Srgb) -> Self {
        match self {
            SketchKind::Pillar(s) => SketchKind::Pillar(s.with_stroke_color(color)),
        }
    }
}

impl Sketch for SketchKind {
    fn regenerate(&mut self) {
        match self {
            SketchKind::Pillar(s) => s.regenerate(),
        }
    }

    fn curves(&self) -> &CurveCollection {
        match self {
            SketchKind::Pillar(s) => s.curves(),
        }
    }

    fn viewport(&self) -> Viewport {
        match self {
            SketchKind::Pillar(s) => s.viewport(),
        }
    }

    fn params(&self) -> Value {
        match self {
            SketchKind::Pillar(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SketchKind::Pillar(s) => s.param_schema(),
        }
    }

    fn stroke(&self) -> StrokeStyle {
        match self {
            SketchKind::Pillar(s) => s.stroke(),
        }
    }
}
