//! Deterministic per-run RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every engine run owns exactly one `SearchRng`, seeded from the run
//! configuration.  There is no global or thread-local generator anywhere in
//! the workspace, so identical (seed, config, network) inputs always produce
//! an identical itinerary — randomness is the only nondeterminism source and
//! it is fully caller-controlled.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG injected into the randomized search and both colony engines.
///
/// Wraps `SmallRng`; the type is `!Sync` so a run's random stream can never
/// be shared between threads by accident.
pub struct SearchRng(SmallRng);

impl SearchRng {
    pub fn new(seed: u64) -> Self {
        SearchRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).  This is the uniform
    /// random edge permutation of the constrained depth-first search.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Roulette-wheel selection: pick an index with probability proportional
    /// to its weight.
    ///
    /// Negative weights count as zero.  If every weight is zero the pick
    /// degrades to uniform.  Returns `None` only for an empty slice.
    pub fn pick_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
        if total <= 0.0 {
            return Some(self.gen_range(0..weights.len()));
        }

        let mut spin = self.gen_range(0.0..total);
        for (i, w) in weights.iter().enumerate() {
            spin -= w.max(0.0);
            if spin < 0.0 {
                return Some(i);
            }
        }
        // f64 rounding can leave spin at exactly 0 after the last subtraction.
        Some(weights.len() - 1)
    }
}
