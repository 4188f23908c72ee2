#![deny(unsafe_code)]
//! Core types and traits for pillar, a parametric noise-warped line sketch.
//!
//! Provides the `Sketch` trait, `Curve`/`CurveCollection` with spline
//! smoothing, `Vertex`/`Viewport` geometry, seeded `NoiseField`s, stroke
//! colors, presets and recipes, the `Xorshift64` PRNG and parameter helpers.

pub mod color;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod math;
pub mod noise_field;
pub mod params;
pub mod preset;
pub mod prng;
pub mod sketch;

pub use color::{Srgb, StrokeStyle};
pub use curve::{Cubic, Curve, CurveCollection, Segment};
pub use error::SketchError;
pub use geometry::{Vertex, Viewport};
pub use noise_field::{NoiseField, PerlinNoise, SimplexNoise};
pub use preset::{PresetBook, Recipe};
pub use prng::Xorshift64;
pub use sketch::Sketch;
