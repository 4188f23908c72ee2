//! PNG preview of a sketch.
//!
//! Feature-gated behind `png` (default on) so library users who only need
//! SVG do not pull in the `image` crate. The pixel conversion lives in
//! [`crate::raster`].

use std::path::Path;

use pillar_core::color::{Srgb, StrokeStyle};
use pillar_core::curve::CurveCollection;
use pillar_core::error::SketchError;
use pillar_core::geometry::Viewport;
use pillar_core::Sketch;

use crate::raster::curves_to_rgba;

/// Writes curves as a `width` x `height` PNG over `background`.
///
/// Returns `SketchError::InvalidDimensions` if either size is zero or
/// overflows `u32`, or `SketchError::Io` on write failure.
pub fn write_png(
    curves: &CurveCollection,
    stroke: &StrokeStyle,
    background: Srgb,
    viewport: Viewport,
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), SketchError> {
    if width == 0 || height == 0 {
        return Err(SketchError::InvalidDimensions);
    }
    let w = u32::try_from(width).map_err(|_| SketchError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| SketchError::InvalidDimensions)?;
    let rgba = curves_to_rgba(curves, stroke, background, viewport, width, height);
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SketchError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SketchError::Io(e.to_string()))?;
    log::info!("wrote {w}x{h} preview to {}", path.display());
    Ok(())
}

/// Writes a preview of the sketch at its viewport size (rounded up).
pub fn write_sketch_png(
    sketch: &dyn Sketch,
    background: Srgb,
    path: &Path,
) -> Result<(), SketchError> {
    let viewport = sketch.viewport();
    write_png(
        sketch.curves(),
        &sketch.stroke(),
        background,
        viewport,
        viewport.width().ceil() as usize,
        viewport.height().ceil() as usize,
        path,
    )
}
