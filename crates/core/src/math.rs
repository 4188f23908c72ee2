//! Scalar helpers shared by the generators.

/// Smallest divisor used in place of a zero or negative smoothing value.
pub const MIN_DIVISOR: f64 = 1e-3;

/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping: values outside the input range extrapolate. A degenerate
/// input range yields a non-finite result, so callers guard it.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Clamps `value` into `[min, max]`. NaN collapses to `min`.
pub fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Quintic ease-out: `1 + (t - 1)^5`. Steep near `t = 0`, flat near `t = 1`.
pub fn ease_out_quint(t: f64) -> f64 {
    1.0 + (t - 1.0).powi(5)
}

/// Returns `divisor`, or [`MIN_DIVISOR`] when it is not a usable positive number.
pub fn safe_divisor(divisor: f64) -> f64 {
    if divisor.is_finite() && divisor >= MIN_DIVISOR {
        divisor
    } else {
        MIN_DIVISOR
    }
}
