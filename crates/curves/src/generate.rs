//! The curve-field generator.
//!
//! Pure: the output depends only on the parameters, the noise field and the
//! viewport. Per vertex the order is fixed: grid position, rounding clamp,
//! noise sample, center amplitude, x displacement, river displacement,
//! y displacement. Reordering any of these changes the picture.

use pillar_core::curve::{Curve, CurveCollection};
use pillar_core::geometry::{Vertex, Viewport};
use pillar_core::noise_field::NoiseField;

use crate::params::PillarParams;
use crate::shaping::{exp_center_amp, rounding_bounds, RowBounds};

/// The river samples a slice this many times further along z than `seed`.
const RIVER_SEED_FACTOR: f64 = 10.0;

/// Undisplaced grid geometry derived from params and viewport.
#[derive(Debug, Clone, Copy)]
struct Grid {
    margin_x: f64,
    margin_y: f64,
    step_x: f64,
    step_y: f64,
    center: Vertex,
    /// Radius of the center-amplitude falloff.
    falloff_radius: f64,
}

impl Grid {
    fn new(p: &PillarParams, viewport: Viewport) -> Self {
        let (vw, vh) = (viewport.width(), viewport.height());
        let drawable_w = vw * p.width;
        let drawable_h = vh * p.height;
        Self {
            margin_x: (vw - drawable_w) / 2.0,
            margin_y: (vh - drawable_h) / 2.0,
            // Zero vertices means a single column at the left margin.
            step_x: if p.n_vertices == 0 {
                0.0
            } else {
                drawable_w / p.n_vertices as f64
            },
            step_y: if p.n_lines == 0 {
                0.0
            } else {
                drawable_h / p.n_lines as f64
            },
            center: viewport.center(),
            falloff_radius: drawable_w * p.exp_width,
        }
    }

    fn base(&self, row: usize, col: usize) -> Vertex {
        Vertex::new(
            self.margin_x + self.step_x * col as f64,
            self.margin_y + self.step_y * row as f64,
        )
    }

    fn row_bounds(&self, p: &PillarParams, row: usize) -> Option<RowBounds> {
        p.rounded.then(|| {
            rounding_bounds(row, p.n_lines, p.how_round, self.center.x, self.margin_x)
        })
    }
}

/// Generates the full curve collection.
///
/// Parameters are normalized first, so any input yields finite curves:
/// `n_lines` row curves of `n_vertices + 1` points each, followed by
/// `n_vertices` fabric curves of `n_lines` points when fabric is on.
/// Counts are capped at [`crate::params::MAX_LINES`] rows and
/// [`crate::params::MAX_VERTICES`] vertices per row; above the caps the
/// output has fewer curves (or points) than requested.
pub fn generate(
    params: &PillarParams,
    noise: &dyn NoiseField,
    viewport: Viewport,
) -> CurveCollection {
    let p = params.normalized();
    let grid = Grid::new(&p, viewport);
    let mut collection = CurveCollection::new();

    for row in 0..p.n_lines {
        let bounds = grid.row_bounds(&p, row);
        let mut curve = Curve::with_capacity(p.n_vertices + 1);
        for col in 0..=p.n_vertices {
            let mut v = grid.base(row, col);
            if let Some(b) = bounds {
                v.x = b.clamp(v.x);
            }
            curve.push(displace(&p, noise, &grid, v));
        }
        curve.smooth();
        collection.push_row(curve);
    }

    if p.draw_fabric {
        weave_fabric(&mut collection, p.n_vertices);
    }

    log::debug!(
        "generated {} rows, {} fabric curves, {} points",
        collection.rows().len(),
        collection.fabric().len(),
        collection.point_count()
    );
    collection
}

/// Applies noise, center amplitude and river displacement to one grid point.
fn displace(p: &PillarParams, noise: &dyn NoiseField, grid: &Grid, at: Vertex) -> Vertex {
    let Vertex { mut x, mut y } = at;
    let n = noise.sample(x / p.smooth_x, y / p.smooth_y, p.seed);

    let amp = if p.enable_exp_center_amp {
        exp_center_amp(grid.center.distance(at), grid.falloff_radius, p.base, p.exponent)
    } else {
        1.0
    };

    if !p.straight_edges {
        x += n * p.amp_x * amp;
    }
    if p.river_enable {
        let river = noise.sample(
            x / p.river_smooth,
            y / p.river_smooth,
            p.seed * RIVER_SEED_FACTOR,
        );
        x += river * p.river_amp;
    }
    y += n * p.amp_y * amp;

    Vertex::new(x, y)
}

/// Adds one vertical curve per column index `0..n_vertices`, threading the
/// already generated rows top to bottom.
fn weave_fabric(collection: &mut CurveCollection, n_vertices: usize) {
    if collection.rows().is_empty() {
        return;
    }
    let columns: Vec<Curve> = (0..n_vertices)
        .map(|k| {
            let mut column =
                Curve::from_points(collection.rows().iter().filter_map(|row| row.point(k)));
            column.smooth();
            column
        })
        .collect();
    for column in columns {
        collection.push_fabric(column);
    }
}
