//! Smoothable curves and the collection a generation pass produces.
//!
//! A [`Curve`] is an ordered list of [`Segment`]s. Each segment is an
//! anchor point plus absolute incoming/outgoing Bézier control points; a
//! freshly built curve has its handles sitting on the anchors, i.e. straight
//! lines. [`Curve::smooth`] turns it into an interpolating cubic spline.

use serde::{Deserialize, Serialize};

use crate::geometry::Vertex;

/// An anchor point with its incoming and outgoing cubic control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub point: Vertex,
    pub handle_in: Vertex,
    pub handle_out: Vertex,
}

impl Segment {
    /// A corner segment: both handles on the anchor.
    pub fn corner(point: Vertex) -> Self {
        Self {
            point,
            handle_in: point,
            handle_out: point,
        }
    }
}

/// One cubic Bézier piece between two consecutive anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub from: Vertex,
    pub ctrl1: Vertex,
    pub ctrl2: Vertex,
    pub to: Vertex,
}

impl Cubic {
    /// Evaluates the curve at `t` in [0, 1] (de Casteljau).
    pub fn at(&self, t: f64) -> Vertex {
        let a = self.from.lerp(self.ctrl1, t);
        let b = self.ctrl1.lerp(self.ctrl2, t);
        let c = self.ctrl2.lerp(self.to, t);
        let ab = a.lerp(b, t);
        let bc = b.lerp(c, t);
        ab.lerp(bc, t)
    }
}

/// An open path through an ordered list of anchors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    segments: Vec<Segment>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Builds an unsmoothed curve through `points`.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        Self {
            segments: points.into_iter().map(Segment::corner).collect(),
        }
    }

    /// Appends an anchor with handles on the point.
    pub fn push(&mut self, point: Vertex) {
        self.segments.push(Segment::corner(point));
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The `index`-th anchor, if present.
    pub fn point(&self, index: usize) -> Option<Vertex> {
        self.segments.get(index).map(|s| s.point)
    }

    /// Anchors in order.
    pub fn points(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.segments.iter().map(|s| s.point)
    }

    /// Fits an interpolating spline through the anchors.
    ///
    /// Handles are Catmull–Rom tangents converted to cubic Bézier form: for
    /// anchor `i` the tangent is `(p[i+1] - p[i-1]) / 6`, with the end
    /// anchors duplicated so the curve starts and ends on its first and last
    /// points. Anchors are never moved.
    pub fn smooth(&mut self) {
        let n = self.segments.len();
        if n < 2 {
            return;
        }
        let points: Vec<Vertex> = self.points().collect();
        for (i, seg) in self.segments.iter_mut().enumerate() {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(n - 1)];
            let tx = (next.x - prev.x) / 6.0;
            let ty = (next.y - prev.y) / 6.0;
            seg.handle_in = Vertex::new(seg.point.x - tx, seg.point.y - ty);
            seg.handle_out = Vertex::new(seg.point.x + tx, seg.point.y + ty);
        }
    }

    /// Cubic pieces between consecutive anchors (`len() - 1` of them).
    pub fn cubics(&self) -> impl Iterator<Item = Cubic> + '_ {
        self.segments.windows(2).map(|w| Cubic {
            from: w[0].point,
            ctrl1: w[0].handle_out,
            ctrl2: w[1].handle_in,
            to: w[1].point,
        })
    }

    /// Approximates the curve by a polyline with `steps` samples per piece.
    ///
    /// The result starts on the first anchor and ends on the last one.
    pub fn flatten(&self, steps: usize) -> Vec<Vertex> {
        let steps = steps.max(1);
        let mut out = Vec::with_capacity(self.len().saturating_sub(1) * steps + 1);
        if let Some(first) = self.point(0) {
            out.push(first);
        }
        for cubic in self.cubics() {
            out.extend((1..=steps).map(|s| cubic.at(s as f64 / steps as f64)));
        }
        out
    }

    /// True when every anchor and handle is finite.
    pub fn is_finite(&self) -> bool {
        self.segments
            .iter()
            .all(|s| s.point.is_finite() && s.handle_in.is_finite() && s.handle_out.is_finite())
    }
}

/// Output of one generation pass: row curves, then optional fabric curves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveCollection {
    rows: Vec<Curve>,
    fabric: Vec<Curve>,
}

impl CurveCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, curve: Curve) {
        self.rows.push(curve);
    }

    pub fn push_fabric(&mut self, curve: Curve) {
        self.fabric.push(curve);
    }

    /// Horizontal curves, top to bottom.
    pub fn rows(&self) -> &[Curve] {
        &self.rows
    }

    /// Vertical curves, left to right.
    pub fn fabric(&self) -> &[Curve] {
        &self.fabric
    }

    /// All curves in render order: rows first, then fabric.
    pub fn iter(&self) -> impl Iterator<Item = &Curve> + '_ {
        self.rows.iter().chain(self.fabric.iter())
    }

    /// Total curve count.
    pub fn len(&self) -> usize {
        self.rows.len() + self.fabric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total anchor count over every curve.
    pub fn point_count(&self) -> usize {
        self.iter().map(Curve::len).sum()
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(Curve::is_finite)
    }
}
