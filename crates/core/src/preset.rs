//! Named parameter snapshots and reproducible recipes.
//!
//! A [`PresetBook`] maps preset names to parameter objects, as a control
//! panel would remember them. A [`Recipe`] captures everything needed to
//! recreate one exported piece: sketch name, viewport, noise field and its
//! instance seed, and the full parameter object.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SketchError;
use crate::geometry::Viewport;

/// Name → parameter object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetBook {
    presets: BTreeMap<String, Value>,
}

impl PresetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of `{ "name": { ...params } }`.
    pub fn from_json_str(json: &str) -> Result<Self, SketchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a preset file.
    pub fn load(path: &Path) -> Result<Self, SketchError> {
        let text = std::fs::read_to_string(path)?;
        let book = Self::from_json_str(&text)?;
        log::debug!("loaded {} presets from {}", book.len(), path.display());
        Ok(book)
    }

    /// Adds or replaces a preset.
    pub fn insert(&mut self, name: impl Into<String>, params: Value) {
        self.presets.insert(name.into(), params);
    }

    /// Adds every preset of `other`, replacing same-named entries.
    pub fn extend(&mut self, other: PresetBook) {
        self.presets.extend(other.presets);
    }

    /// Looks up a preset by name.
    pub fn get(&self, name: &str) -> Result<&Value, SketchError> {
        self.presets
            .get(name)
            .ok_or_else(|| SketchError::UnknownPreset(name.to_string()))
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Reproducible description of one generated piece.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub sketch: String,
    pub width: f64,
    pub height: f64,
    pub noise: String,
    pub noise_seed: u32,
    pub params: Value,
}

impl Recipe {
    /// A recipe with empty params (`{}`), i.e. all defaults.
    pub fn new(sketch: &str, viewport: Viewport, noise: &str, noise_seed: u32) -> Self {
        Self {
            sketch: sketch.to_string(),
            width: viewport.width(),
            height: viewport.height(),
            noise: noise.to_string(),
            noise_seed,
            params: Value::Object(serde_json::Map::new()),
        }
    }

    /// The recipe's viewport; fails for degenerate dimensions.
    pub fn viewport(&self) -> Result<Viewport, SketchError> {
        Viewport::new(self.width, self.height)
    }

    /// Writes the recipe as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), SketchError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("wrote recipe {}", path.display());
        Ok(())
    }

    /// Reads a recipe written by [`Recipe::save`].
    pub fn load(path: &Path) -> Result<Self, SketchError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn preset_book_parses_named_objects() {
        let book =
            PresetBook::from_json_str(r#"{"calm": {"ampX": 0.5}, "wild": {"ampX": 40}}"#).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.names(), vec!["calm", "wild"]);
        assert_eq!(book.get("wild").unwrap()["ampX"], 40);
    }

    #[test]
    fn preset_book_rejects_non_object_json() {
        assert!(matches!(
            PresetBook::from_json_str("[1, 2]"),
            Err(SketchError::Serialization(_))
        ));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let book = PresetBook::new();
        assert!(book.is_empty());
        assert!(matches!(book.get("nope"), Err(SketchError::UnknownPreset(_))));
    }

    #[test]
    fn extend_replaces_same_named_presets() {
        let mut a = PresetBook::new();
        a.insert("calm", json!({"ampX": 1}));
        let mut b = PresetBook::new();
        b.insert("calm", json!({"ampX": 2}));
        b.insert("river", json!({"riverEnable": true}));
        a.extend(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("calm").unwrap()["ampX"], 2);
    }

    #[test]
    fn recipe_defaults_to_empty_params() {
        let r = Recipe::new("pillar", viewport(), "simplex", 42);
        assert_eq!(r.params, json!({}));
        assert_eq!(r.viewport().unwrap(), viewport());
    }

    #[test]
    fn recipe_json_round_trip() {
        let mut r = Recipe::new("pillar", viewport(), "perlin", 7);
        r.params = json!({"n_lines": 120, "rounded": true, "howRound": 0.25});
        let text = serde_json::to_string(&r).unwrap();
        let back: Recipe = serde_json::from_str(&text).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn recipe_with_bad_dimensions_fails_viewport() {
        let mut r = Recipe::new("pillar", viewport(), "simplex", 1);
        r.width = 0.0;
        assert!(r.viewport().is_err());
    }
}
