//! Forgiving typed readers for parameters stored in a `serde_json::Value` object.
//!
//! Every helper takes the params object, a key and a default. Missing keys and
//! values of the wrong JSON type fall back to the default, so a half-written
//! preset or a stale control-panel snapshot still produces a usable sketch.

use serde_json::Value;

/// Reads `params[name]` as `f64`. Integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads the first of `names` that is present as a number.
///
/// Used for keys that were renamed over time, e.g. a per-axis `smoothX`
/// that falls back to the older single `smoothing` value.
pub fn param_f64_first(params: &Value, names: &[&str], default: f64) -> f64 {
    names
        .iter()
        .find_map(|name| params.get(*name).and_then(Value::as_f64))
        .unwrap_or(default)
}

/// Reads a non-negative count.
///
/// Sliders hand back floats such as `450.0`, so any finite number is accepted
/// and rounded; negative values clamp to `0`.
pub fn param_count(params: &Value, name: &str, default: usize) -> usize {
    match params.get(name) {
        Some(v) => {
            if let Some(n) = v.as_u64() {
                n as usize
            } else if let Some(f) = v.as_f64().filter(|f| f.is_finite()) {
                f.round().max(0.0) as usize
            } else {
                default
            }
        }
        None => default,
    }
}

/// Reads `params[name]` as `bool`.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Reads `params[name]` as an owned `String`.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Shallow-merges the keys of `overrides` into `base`.
///
/// Non-object inputs are ignored; `base` becomes an object if it was not one.
pub fn merge_params(base: &mut Value, overrides: &Value) {
    if !base.is_object() {
        *base = Value::Object(serde_json::Map::new());
    }
    if let (Some(dst), Some(src)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in src {
            dst.insert(k.clone(), v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_float_and_integer() {
        let params = json!({"ampX": 2.5, "riverAmp": 100});
        assert!((param_f64(&params, "ampX", 1.0) - 2.5).abs() < f64::EPSILON);
        assert!((param_f64(&params, "riverAmp", 0.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_mistyped() {
        let params = json!({"ampY": "loud", "base": null});
        assert!((param_f64(&params, "ampY", 3.0) - 3.0).abs() < f64::EPSILON);
        assert!((param_f64(&params, "base", 20.0) - 20.0).abs() < f64::EPSILON);
        assert!((param_f64(&params, "exponent", 0.8) - 0.8).abs() < f64::EPSILON);
        assert!((param_f64(&json!("nope"), "seed", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_first_prefers_earlier_keys() {
        let params = json!({"smoothX": 40.0, "smoothing": 20.0});
        let v = param_f64_first(&params, &["smoothX", "smoothing"], 1.0);
        assert!((v - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_first_uses_legacy_key() {
        let params = json!({"smoothing": 20.0});
        let v = param_f64_first(&params, &["smoothY", "smoothing"], 1.0);
        assert!((v - 20.0).abs() < f64::EPSILON);
        let none = param_f64_first(&json!({}), &["smoothY", "smoothing"], 5.0);
        assert!((none - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_count_reads_integers_and_slider_floats() {
        let params = json!({"n_lines": 450, "n_vertices": 5.4});
        assert_eq!(param_count(&params, "n_lines", 0), 450);
        assert_eq!(param_count(&params, "n_vertices", 0), 5);
    }

    #[test]
    fn param_count_clamps_negative_to_zero() {
        let params = json!({"n_lines": -3});
        assert_eq!(param_count(&params, "n_lines", 10), 0);
    }

    #[test]
    fn param_count_falls_back_for_non_numbers() {
        let params = json!({"n_lines": "many"});
        assert_eq!(param_count(&params, "n_lines", 12), 12);
        assert_eq!(param_count(&params, "n_vertices", 5), 5);
    }

    #[test]
    fn param_bool_reads_and_falls_back() {
        let params = json!({"rounded": true, "drawFabric": 1});
        assert!(param_bool(&params, "rounded", false));
        assert!(!param_bool(&params, "drawFabric", false));
        assert!(param_bool(&params, "straightEdges", true));
    }

    #[test]
    fn param_string_reads_and_falls_back() {
        let params = json!({"noise": "perlin", "other": 4});
        assert_eq!(param_string(&params, "noise", "simplex"), "perlin");
        assert_eq!(param_string(&params, "other", "simplex"), "simplex");
    }

    #[test]
    fn merge_params_overrides_keys() {
        let mut base = json!({"ampX": 1.0, "rounded": false});
        merge_params(&mut base, &json!({"rounded": true, "howRound": 0.3}));
        assert_eq!(base, json!({"ampX": 1.0, "rounded": true, "howRound": 0.3}));
    }

    #[test]
    fn merge_params_turns_non_object_base_into_object() {
        let mut base = json!(null);
        merge_params(&mut base, &json!({"seed": 4.0}));
        assert_eq!(base, json!({"seed": 4.0}));
    }
}
