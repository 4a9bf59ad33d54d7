//! RNG module - seeded shuffling for board generation
//!
//! The engine never reads ambient randomness: callers hand it a seed, which keeps
//! every board reproducible in tests and scripts. The generator is SplitMix64 and
//! range reduction uses Lemire's multiply-shift with rejection, so the
//! Fisher-Yates shuffle built on top of it is unbiased.

/// Small deterministic generator used to deal boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRng {
    state: u64,
}

impl DeckRng {
    /// Create a generator from a seed. Every seed (including 0) is valid.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next 64 random bits
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "DeckRng::below called with an empty range");

        let mut wide = u128::from(self.next_u64()) * u128::from(bound);
        let mut low = wide as u64;
        if low < bound {
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                wide = u128::from(self.next_u64()) * u128::from(bound);
                low = wide as u64;
            }
        }
        (wide >> 64) as u64
    }

    /// Shuffle a slice in place with Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.below((i + 1) as u64) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::new(1)
    }
}
