//! Pure-computation rasterization of a [`CurveCollection`] into RGBA8.
//!
//! Always available (no feature gate) so the PNG snapshot and any other
//! pixel consumer share one conversion. Curves are flattened and stroked by
//! stamping solid disks along the polyline; there is no antialiasing.

use pillar_core::color::{Srgb, StrokeStyle};
use pillar_core::curve::CurveCollection;
use pillar_core::geometry::{Vertex, Viewport};

/// Polyline samples per cubic piece.
const FLATTEN_STEPS: usize = 12;
/// Largest gap, in pixels, between stamped disks.
const STAMP_SPACING: f64 = 0.5;
/// Thinnest stroke radius in pixels, so hairlines stay visible.
const MIN_RADIUS: f64 = 0.5;

fn fill_disk(
    buf: &mut [u8],
    width: usize,
    height: usize,
    center: Vertex,
    radius: f64,
    rgb: [u8; 3],
) {
    let r2 = radius * radius;
    let x0 = (center.x - radius).floor().max(0.0) as usize;
    let y0 = (center.y - radius).floor().max(0.0) as usize;
    let x1 = ((center.x + radius).ceil().max(0.0) as usize).min(width);
    let y1 = ((center.y + radius).ceil().max(0.0) as usize).min(height);
    for py in y0..y1 {
        let dy = py as f64 + 0.5 - center.y;
        for px in x0..x1 {
            let dx = px as f64 + 0.5 - center.x;
            if dx * dx + dy * dy <= r2 {
                let i = (py * width + px) * 4;
                buf[i..i + 3].copy_from_slice(&rgb);
            }
        }
    }
}

/// Clips segment `a`-`b` to the rectangle `lo`..`hi` (Liang-Barsky).
fn clip_segment(a: Vertex, b: Vertex, lo: Vertex, hi: Vertex) -> Option<(Vertex, Vertex)> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, a.x - lo.x),
        (dx, hi.x - a.x),
        (-dy, a.y - lo.y),
        (dy, hi.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| Vertex::new(a.x + dx * t, a.y + dy * t);
    Some((at(t0), at(t1)))
}

/// Rasterizes `curves` (in `viewport` coordinates) into a `width * height`
/// RGBA8 buffer over a solid `background`.
///
/// The viewport is scaled to the pixel size independently on each axis and
/// the stroke width scales with the mean of the two factors. Non-finite
/// points are skipped and segments are clipped to the canvas grown by the
/// stroke radius, so far off-canvas geometry costs nothing. The buffer length is `width * height * 4`.
pub fn curves_to_rgba(
    curves: &CurveCollection,
    stroke: &StrokeStyle,
    background: Srgb,
    viewport: Viewport,
    width: usize,
    height: usize,
) -> Vec<u8> {
    let [br, bg, bb] = background.to_rgb8();
    let mut buf: Vec<u8> = std::iter::repeat([br, bg, bb, 255u8])
        .take(width * height)
        .flatten()
        .collect();
    if width == 0 || height == 0 {
        return buf;
    }

    let sx = width as f64 / viewport.width();
    let sy = height as f64 / viewport.height();
    let radius = (stroke.width * 0.5 * (sx + sy) * 0.5).max(MIN_RADIUS);
    let rgb = stroke.color.to_rgb8();
    let to_pixel = |v: Vertex| Vertex::new(v.x * sx, v.y * sy);
    let lo = Vertex::new(-radius, -radius);
    let hi = Vertex::new(width as f64 + radius, height as f64 + radius);

    for curve in curves.iter() {
        let points: Vec<Vertex> = curve
            .flatten(FLATTEN_STEPS)
            .into_iter()
            .filter(|v| v.is_finite())
            .map(to_pixel)
            .collect();
        if let Some(&first) = points.first() {
            fill_disk(&mut buf, width, height, first, radius, rgb);
        }
        for pair in points.windows(2) {
            let Some((a, b)) = clip_segment(pair[0], pair[1], lo, hi) else {
                continue;
            };
            let stamps = (a.distance(b) / STAMP_SPACING).ceil().max(1.0) as usize;
            for s in 1..=stamps {
                let t = s as f64 / stamps as f64;
                let p = Vertex::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
                fill_disk(&mut buf, width, height, p, radius, rgb);
            }
        }
    }
    buf
}
