//! Per-vertex shaping: corner rounding and center-weighted amplitude.

use pillar_core::math::{ease_out_quint, map_range};

/// Upper end of the second amplitude stage; the mapped value is then cubed.
const AMP_STAGE_MAX: f64 = 5.0;

/// Allowed x-range of one row when rounding is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    pub left: f64,
    pub right: f64,
}

impl RowBounds {
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.left).min(self.right)
    }
}

/// Eased x-range of row `row` out of `n_lines`.
///
/// Rows closer than `how_round * n_lines` rows to the top or bottom edge are
/// pulled toward `center_x`: the normalized position inside that band goes
/// through a quintic ease-out and is mapped from the center (edge row) out
/// to the margin (band boundary). The right bound mirrors the left one
/// about the center. Rows outside the band get the full drawable width, so
/// clamping leaves them untouched.
pub fn rounding_bounds(
    row: usize,
    n_lines: usize,
    how_round: f64,
    center_x: f64,
    margin_x: f64,
) -> RowBounds {
    let full = RowBounds {
        left: margin_x,
        right: 2.0 * center_x - margin_x,
    };
    let band = how_round * n_lines as f64;
    if n_lines == 0 || band <= 0.0 {
        return full;
    }
    let from_edge = row.min(n_lines.saturating_sub(1).saturating_sub(row)) as f64;
    if from_edge >= band {
        return full;
    }
    let t = (from_edge / band).clamp(0.0, 1.0);
    let left = map_range(ease_out_quint(t), 0.0, 1.0, center_x, margin_x);
    RowBounds {
        left,
        right: 2.0 * center_x - left,
    }
}

/// First amplitude stage: inverse distance mapped onto `[0, base]`, raised
/// to `exponent`.
///
/// Zero at or beyond `radius`, and for a non-positive radius.
pub fn center_falloff(dist: f64, radius: f64, base: f64, exponent: f64) -> f64 {
    if radius <= 0.0 || radius.is_nan() {
        return 0.0;
    }
    let reversed = map_range(dist, 0.0, radius, base, 0.0).max(0.0);
    if reversed <= 0.0 {
        return 0.0;
    }
    let amp = reversed.powf(exponent).max(0.0);
    if amp.is_finite() {
        amp
    } else {
        0.0
    }
}

/// Final displacement multiplier for a vertex `dist` away from the center.
///
/// Two stages, both load-bearing for the look: the falloff value is
/// rescaled from `[0, base]` onto `[0, 5]` and cubed, then clamped at 0.
pub fn exp_center_amp(dist: f64, radius: f64, base: f64, exponent: f64) -> f64 {
    if base <= 0.0 || base.is_nan() {
        return 0.0;
    }
    let amp0 = center_falloff(dist, radius, base, exponent);
    let amp = map_range(amp0, 0.0, base, 0.0, AMP_STAGE_MAX).powi(3).max(0.0);
    if amp.is_finite() {
        amp
    } else {
        0.0
    }
}
