//! Deterministic pseudo-random number generation
//!
//! Training reproducibility is a hard requirement: the shuffle split, the
//! bootstrap samples, and the synthetic dataset all draw from SplitMix64
//! streams derived from a fixed seed, so a given (dataset, seed) pair always
//! produces the same trained model.

/// SplitMix64 generator (Steele, Lea & Flood 2014)
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        // 53 high bits give a uniform dyadic rational in [0, 1)
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in [0, n). n must be non-zero.
    pub fn gen_index(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize
    }

    /// Uniform f64 in [low, high)
    pub fn gen_range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Standard normal deviate via Box-Muller
    pub fn next_gaussian(&mut self) -> f64 {
        // u1 in (0, 1] to keep the log finite
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i + 1);
            items.swap(i, j);
        }
    }
}
