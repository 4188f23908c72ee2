//! Coherent 3D noise fields.
//!
//! A [`NoiseField`] maps `(x, y, z)` to a value in roughly [-1, 1]. The
//! instance seed is fixed at construction; sketches pass their own `seed`
//! parameter as `z` to pick a slice through the field. All implementations
//! are deterministic: same inputs produce the same output.

use noise::{NoiseFn, OpenSimplex, Perlin};

use crate::error::SketchError;

/// All noise field names accepted by [`noise_from_name`].
const NOISE_NAMES: &[&str] = &["simplex", "perlin"];

/// A seeded source of coherent 3D noise.
pub trait NoiseField: Send + Sync {
    /// Sample the field. Output lies in [-1, 1].
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// OpenSimplex noise.
pub struct SimplexNoise {
    noise: OpenSimplex,
}

/// Classic Perlin gradient noise.
pub struct PerlinNoise {
    noise: Perlin,
}

impl SimplexNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
        }
    }
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }
}

impl NoiseField for SimplexNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }
}

impl NoiseField for PerlinNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }
}

impl<N: NoiseField + ?Sized> NoiseField for Box<N> {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample(x, y, z)
    }
}

/// Builds a boxed noise field by name (`"simplex"` or `"perlin"`).
pub fn noise_from_name(name: &str, seed: u32) -> Result<Box<dyn NoiseField>, SketchError> {
    match name {
        "simplex" => Ok(Box::new(SimplexNoise::new(seed))),
        "perlin" => Ok(Box::new(PerlinNoise::new(seed))),
        _ => Err(SketchError::UnknownNoise(name.to_string())),
    }
}

/// Names accepted by [`noise_from_name`].
pub fn list_noise() -> &'static [&'static str] {
    NOISE_NAMES
}
