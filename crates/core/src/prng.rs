//! Xorshift64 PRNG used for "randomize" actions.
//!
//! Generation itself is noise-driven and draws no random numbers; this
//! generator only picks fresh `seed` values and noise instance seeds, so a
//! session can be replayed from the PRNG seed alone.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Xorshift64 (shifts 13, 7, 17). Same seed, same sequence, on every platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Replacement for seed 0, the all-zero fixed point of xorshift.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Seeds from the wall clock (nanoseconds since the epoch).
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(Self::FALLBACK_SEED);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Upper 32 bits of the next value.
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in [0, 1) with 53 bits of mantissa.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_value_for_seed_42() {
        // Changing this invalidates every recorded randomize session.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_uses_fallback() {
        let mut zero = Xorshift64::new(0);
        let mut fallback = Xorshift64::new(Xorshift64::FALLBACK_SEED);
        assert_ne!(zero.next_u64(), 0);
        let mut zero = Xorshift64::new(0);
        assert_eq!(zero.next_u64(), fallback.next_u64());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift64::new(2000);
        let mut b = Xorshift64::new(2000);
        for _ in 0..500 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = Xorshift64::new(11);
        for _ in 0..10_000 {
            let v = rng.next_range(0.0, 2000.0);
            assert!((0.0..2000.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn next_u32_is_high_half() {
        let mut a = Xorshift64::new(99);
        let mut b = Xorshift64::new(99);
        assert_eq!(a.next_u32(), (b.next_u64() >> 32) as u32);
    }

    #[test]
    fn from_time_produces_nonzero_state() {
        let mut rng = Xorshift64::from_time();
        assert_ne!(rng.next_u64(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..50 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v));
                }
            }
        }
    }
}
