//! sRGB colors for strokes and backgrounds.

use crate::error::SketchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`; the round-trip quantizes to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Parses `"black"`, `"white"`, or a hex color (`#rrggbb`, `#rgb`, `#` optional).
    pub fn parse(s: &str) -> Result<Srgb, SketchError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Srgb::BLACK),
            "white" => Ok(Srgb::WHITE),
            other => Srgb::from_hex(other),
        }
    }

    /// Parses a hex color like `"#ff00aa"`, `"ff00aa"` or the short `"#f0a"`.
    ///
    /// Returns `SketchError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Srgb, SketchError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = match hex.len() {
            6 => hex.to_string(),
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            n => {
                return Err(SketchError::InvalidColor(format!(
                    "expected 3 or 6 hex digits, got {n}"
                )))
            }
        };
        let component = |range: std::ops::Range<usize>, name: &str| {
            expanded
                .get(range)
                .ok_or_else(|| SketchError::InvalidColor(format!("non-ascii {name} component")))
                .and_then(|digits| {
                    u8::from_str_radix(digits, 16).map_err(|e| {
                        SketchError::InvalidColor(format!("invalid {name} component: {e}"))
                    })
                })
                .map(|v| v as f64 / 255.0)
        };
        Ok(Srgb {
            r: component(0..2, "red")?,
            g: component(2..4, "green")?,
            b: component(4..6, "blue")?,
        })
    }

    /// `"#rrggbb"`, components clamped and rounded to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// 8-bit components, clamped and rounded.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Uniform stroke applied to every curve of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Srgb,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Srgb::BLACK,
            width: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Same color, new width (negative or NaN widths become 0).
    pub fn with_width(self, width: f64) -> Self {
        Self {
            width: width.max(0.0),
            ..self
        }
    }
}
