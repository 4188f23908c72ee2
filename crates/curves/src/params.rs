//! The pillar parameter set.
//!
//! JSON keys follow the control panel's names (`ampX`, `n_lines`,
//! `enableExpCenterAmp`, ...), so presets saved by earlier versions of the
//! sketch load unchanged.

use pillar_core::math::{clamp_range, safe_divisor};
use pillar_core::params::{param_bool, param_count, param_f64, param_f64_first};
use serde_json::{json, Value};

pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_SEED: f64 = 0.0;
/// Used for both axes unless `smoothX`/`smoothY` are given.
pub const DEFAULT_SMOOTHING: f64 = 20.0;
pub const DEFAULT_AMP_X: f64 = 1.0;
pub const DEFAULT_AMP_Y: f64 = 1.0;
pub const DEFAULT_RIVER_AMP: f64 = 100.0;
pub const DEFAULT_RIVER_SMOOTH: f64 = 500.0;
pub const DEFAULT_HEIGHT: f64 = 0.9;
pub const DEFAULT_WIDTH: f64 = 0.3;
pub const DEFAULT_N_LINES: usize = 450;
pub const DEFAULT_N_VERTICES: usize = 5;
pub const DEFAULT_EXP_WIDTH: f64 = 1.0;
pub const DEFAULT_EXPONENT: f64 = 0.8;
pub const DEFAULT_BASE: f64 = 20.0;
pub const DEFAULT_HOW_ROUND: f64 = 0.2;

/// Upper bound of the randomized `seed`.
pub const SEED_RANGE: f64 = 2000.0;
/// Hard caps applied by [`PillarParams::normalized`] to keep a typo from
/// allocating millions of points.
pub const MAX_LINES: usize = 5000;
pub const MAX_VERTICES: usize = 1000;

/// Every knob of the pillar sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarParams {
    /// Stroke width handed to the renderer.
    pub stroke_width: f64,
    /// Add vertical curves through same-index vertices of every row.
    pub draw_fabric: bool,

    /// Third noise coordinate; picks a slice of the noise field.
    pub seed: f64,
    /// Divisor applied to x before sampling (larger = smoother).
    pub smooth_x: f64,
    /// Divisor applied to y before sampling.
    pub smooth_y: f64,
    pub amp_x: f64,
    pub amp_y: f64,

    /// Second, independently seeded x displacement.
    pub river_enable: bool,
    pub river_amp: f64,
    pub river_smooth: f64,

    /// Fraction of the viewport height used, centered.
    pub height: f64,
    /// Fraction of the viewport width used, centered.
    pub width: f64,
    pub n_lines: usize,
    /// Rows have `n_vertices + 1` points.
    pub n_vertices: usize,
    /// Only warp y with the primary noise.
    pub straight_edges: bool,

    /// Weight displacement by closeness to the viewport center.
    pub enable_exp_center_amp: bool,
    /// Falloff radius as a fraction of the drawable width.
    pub exp_width: f64,
    pub exponent: f64,
    pub base: f64,

    /// Ease the outer rows' extent toward the center.
    pub rounded: bool,
    /// Fraction of rows, from top and from bottom, that get rounded.
    pub how_round: f64,
}

impl Default for PillarParams {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            draw_fabric: false,
            seed: DEFAULT_SEED,
            smooth_x: DEFAULT_SMOOTHING,
            smooth_y: DEFAULT_SMOOTHING,
            amp_x: DEFAULT_AMP_X,
            amp_y: DEFAULT_AMP_Y,
            river_enable: false,
            river_amp: DEFAULT_RIVER_AMP,
            river_smooth: DEFAULT_RIVER_SMOOTH,
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            n_lines: DEFAULT_N_LINES,
            n_vertices: DEFAULT_N_VERTICES,
            straight_edges: true,
            enable_exp_center_amp: true,
            exp_width: DEFAULT_EXP_WIDTH,
            exponent: DEFAULT_EXPONENT,
            base: DEFAULT_BASE,
            rounded: false,
            how_round: DEFAULT_HOW_ROUND,
        }
    }
}

impl PillarParams {
    /// Reads parameters from a JSON object, falling back to defaults.
    ///
    /// `smoothX`/`smoothY` fall back to the single `smoothing` key.
    pub fn from_json(params: &Value) -> Self {
        Self {
            stroke_width: param_f64(params, "strokeWidth", DEFAULT_STROKE_WIDTH),
            draw_fabric: param_bool(params, "drawFabric", false),
            seed: param_f64(params, "seed", DEFAULT_SEED),
            smooth_x: param_f64_first(params, &["smoothX", "smoothing"], DEFAULT_SMOOTHING),
            smooth_y: param_f64_first(params, &["smoothY", "smoothing"], DEFAULT_SMOOTHING),
            amp_x: param_f64(params, "ampX", DEFAULT_AMP_X),
            amp_y: param_f64(params, "ampY", DEFAULT_AMP_Y),
            river_enable: param_bool(params, "riverEnable", false),
            river_amp: param_f64(params, "riverAmp", DEFAULT_RIVER_AMP),
            river_smooth: param_f64(params, "riverSmooth", DEFAULT_RIVER_SMOOTH),
            height: param_f64(params, "height", DEFAULT_HEIGHT),
            width: param_f64(params, "width", DEFAULT_WIDTH),
            n_lines: param_count(params, "n_lines", DEFAULT_N_LINES),
            n_vertices: param_count(params, "n_vertices", DEFAULT_N_VERTICES),
            straight_edges: param_bool(params, "straightEdges", true),
            enable_exp_center_amp: param_bool(params, "enableExpCenterAmp", true),
            exp_width: param_f64(params, "expWidth", DEFAULT_EXP_WIDTH),
            exponent: param_f64(params, "exponent", DEFAULT_EXPONENT),
            base: param_f64(params, "base", DEFAULT_BASE),
            rounded: param_bool(params, "rounded", false),
            how_round: param_f64(params, "howRound", DEFAULT_HOW_ROUND),
        }
    }

    /// Parameters as a JSON object using the control-panel key names.
    pub fn to_json(&self) -> Value {
        json!({
            "strokeWidth": self.stroke_width,
            "drawFabric": self.draw_fabric,
            "seed": self.seed,
            "smoothX": self.smooth_x,
            "smoothY": self.smooth_y,
            "ampX": self.amp_x,
            "ampY": self.amp_y,
            "riverEnable": self.river_enable,
            "riverAmp": self.river_amp,
            "riverSmooth": self.river_smooth,
            "height": self.height,
            "width": self.width,
            "n_lines": self.n_lines,
            "n_vertices": self.n_vertices,
            "straightEdges": self.straight_edges,
            "enableExpCenterAmp": self.enable_exp_center_amp,
            "expWidth": self.exp_width,
            "exponent": self.exponent,
            "base": self.base,
            "rounded": self.rounded,
            "howRound": self.how_round,
        })
    }

    /// Copy with every value forced into its usable domain.
    ///
    /// Fractions clamp to [0, 1], smoothing divisors below
    /// [`MIN_DIVISOR`](pillar_core::math::MIN_DIVISOR) are replaced by it,
    /// widths and bases clamp at 0, non-finite amplitudes and seeds become 0,
    /// a non-finite exponent falls back to its default, and counts are capped.
    pub fn normalized(&self) -> Self {
        Self {
            stroke_width: self.stroke_width.max(0.0),
            draw_fabric: self.draw_fabric,
            seed: finite_or(self.seed, 0.0),
            smooth_x: safe_divisor(self.smooth_x),
            smooth_y: safe_divisor(self.smooth_y),
            amp_x: finite_or(self.amp_x, 0.0),
            amp_y: finite_or(self.amp_y, 0.0),
            river_enable: self.river_enable,
            river_amp: finite_or(self.river_amp, 0.0),
            river_smooth: safe_divisor(self.river_smooth),
            height: clamp_range(self.height, 0.0, 1.0),
            width: clamp_range(self.width, 0.0, 1.0),
            n_lines: self.n_lines.min(MAX_LINES),
            n_vertices: self.n_vertices.min(MAX_VERTICES),
            straight_edges: self.straight_edges,
            enable_exp_center_amp: self.enable_exp_center_amp,
            exp_width: clamp_range(self.exp_width, 0.0, 1.0),
            exponent: finite_or(self.exponent, DEFAULT_EXPONENT),
            base: finite_or(self.base, 0.0).max(0.0),
            rounded: self.rounded,
            how_round: clamp_range(self.how_round, 0.0, 1.0),
        }
    }

    /// Schema for a control panel: type, default, range, step, description.
    pub fn schema() -> Value {
        json!({
            "strokeWidth": number(DEFAULT_STROKE_WIDTH, 0.0, 5.0, 0.001, "Stroke width of every curve"),
            "drawFabric": boolean(false, "Connect same-index vertices across rows with vertical curves"),
            "seed": number(DEFAULT_SEED, 0.0, SEED_RANGE, 0.001, "Noise slice; randomize picks a value in [0, 2000)"),
            "smoothX": number(DEFAULT_SMOOTHING, 0.0, 200.0, 0.001, "Divisor applied to x before sampling noise"),
            "smoothY": number(DEFAULT_SMOOTHING, 0.0, 200.0, 0.001, "Divisor applied to y before sampling noise"),
            "ampX": number(DEFAULT_AMP_X, 0.0, 50.0, 0.001, "Horizontal noise amplitude"),
            "ampY": number(DEFAULT_AMP_Y, 0.0, 50.0, 0.001, "Vertical noise amplitude"),
            "riverEnable": boolean(false, "Add a second, independently seeded horizontal displacement"),
            "riverAmp": number(DEFAULT_RIVER_AMP, 0.0, 100.0, 0.001, "River displacement amplitude"),
            "riverSmooth": number(DEFAULT_RIVER_SMOOTH, 0.0, 1000.0, 0.001, "River noise smoothing divisor"),
            "height": number(DEFAULT_HEIGHT, 0.0, 1.0, 0.001, "Fraction of the viewport height used"),
            "width": number(DEFAULT_WIDTH, 0.0, 1.0, 0.001, "Fraction of the viewport width used"),
            "n_lines": integer(DEFAULT_N_LINES, 0, 500, "Number of row curves"),
            "n_vertices": integer(DEFAULT_N_VERTICES, 1, 50, "Points per row minus one"),
            "straightEdges": boolean(true, "Keep x free of primary noise displacement"),
            "enableExpCenterAmp": boolean(true, "Weight displacement by closeness to the center"),
            "expWidth": number(DEFAULT_EXP_WIDTH, 0.0, 1.0, 0.01, "Falloff radius as a fraction of the drawable width"),
            "exponent": number(DEFAULT_EXPONENT, 0.7, 1.2, 0.0001, "Falloff exponent"),
            "base": number(DEFAULT_BASE, 0.0, 100.0, 0.1, "Falloff base value"),
            "rounded": boolean(false, "Ease the extent of the outer rows toward the center"),
            "howRound": number(DEFAULT_HOW_ROUND, 0.0, 1.0, 0.01, "Fraction of rows rounded at top and bottom"),
        })
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn number(default: f64, min: f64, max: f64, step: f64, description: &str) -> Value {
    json!({
        "type": "number",
        "default": default,
        "min": min,
        "max": max,
        "step": step,
        "description": description,
    })
}

fn integer(default: usize, min: usize, max: usize, description: &str) -> Value {
    json!({
        "type": "integer",
        "default": default,
        "min": min,
        "max": max,
        "step": 1,
        "description": description,
    })
}

fn boolean(default: bool, description: &str) -> Value {
    json!({
        "type": "boolean",
        "default": default,
        "description": description,
    })
}
