//! The `Sketch` trait implemented by every curve generator.
//!
//! The trait is object-safe so the CLI can hold a `Box<dyn Sketch>` picked
//! by name at runtime.

use crate::color::StrokeStyle;
use crate::curve::CurveCollection;
use crate::geometry::Viewport;
use serde_json::Value;

/// A parametric vector sketch.
///
/// The controller owns the sketch, mutates its parameters, then calls
/// [`Sketch::regenerate`]. Each regeneration replaces the previous
/// [`CurveCollection`] wholesale; there is no incremental update.
pub trait Sketch {
    /// Rebuild the curve collection from the current parameters.
    fn regenerate(&mut self);

    /// Curves from the latest regeneration.
    fn curves(&self) -> &CurveCollection;

    /// Surface the curves were generated for.
    fn viewport(&self) -> Viewport;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Type, default, range and description of every parameter.
    fn param_schema(&self) -> Value;

    /// Stroke to render the curves with.
    fn stroke(&self) -> StrokeStyle {
        StrokeStyle::default()
    }
}
