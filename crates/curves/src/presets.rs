//! Presets shipped with the pillar sketch.
//!
//! Each one switches on one stage of the generator on top of the defaults,
//! so the earlier, simpler looks stay one name away.

use pillar_core::params::merge_params;
use pillar_core::preset::PresetBook;
use serde_json::json;

use crate::params::PillarParams;

/// Built-in presets, keyed by name.
pub fn builtin_presets() -> PresetBook {
    let defaults = PillarParams::default().to_json();
    let variant = |overrides: serde_json::Value| {
        let mut params = defaults.clone();
        merge_params(&mut params, &overrides);
        params
    };

    let mut book = PresetBook::new();
    book.insert("default", defaults.clone());
    book.insert(
        "plain",
        variant(json!({
            "enableExpCenterAmp": false,
            "straightEdges": false,
            "ampX": 6.0,
            "ampY": 6.0,
            "n_lines": 200,
        })),
    );
    book.insert(
        "river",
        variant(json!({
            "riverEnable": true,
            "riverAmp": 60.0,
            "riverSmooth": 400.0,
        })),
    );
    book.insert(
        "rounded",
        variant(json!({
            "rounded": true,
            "howRound": 0.15,
            "width": 0.4,
        })),
    );
    book.insert(
        "fabric",
        variant(json!({
            "drawFabric": true,
            "n_lines": 120,
            "n_vertices": 24,
            "straightEdges": false,
            "strokeWidth": 0.5,
        })),
    );
    book
}
