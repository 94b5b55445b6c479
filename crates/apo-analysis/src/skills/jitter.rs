//! Seedable deterministic jitter. Identical seed and key always yield the
//! same value.

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Source of uniform values in `[0, 1)` keyed by a string and a salt.
pub trait JitterSource: Send + Sync {
    fn unit(&self, key: &str, salt: u64) -> f64;

    /// Raw hash for discrete choices.
    fn bits(&self, key: &str, salt: u64) -> u64;
}

/// xxh3-based jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashJitter {
    seed: u64,
}

impl HashJitter {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl JitterSource for HashJitter {
    fn unit(&self, key: &str, salt: u64) -> f64 {
        // Top 53 bits fill an f64 mantissa exactly.
        (self.bits(key, salt) >> 11) as f64 / (1u64 << 53) as f64
    }

    fn bits(&self, key: &str, salt: u64) -> u64 {
        xxh3_64_with_seed(key.as_bytes(), self.seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
