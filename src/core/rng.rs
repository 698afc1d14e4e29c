//! Deterministic random number generation for card layout.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical placements
//! - **Forkable**: Create independent branches for repeated renders
//! - **Per-card streams**: Each card index gets its own sequence, so cards
//!   can be laid out in any order (or in parallel) with identical results
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use dobble_deck::core::LayoutRng;
//!
//! let rng = LayoutRng::new(42);
//!
//! let mut card_3 = rng.for_card(3);
//! let mut card_3_again = rng.for_card(3);
//! assert_eq!(card_3.gen_f64_in(0.0, 1.0), card_3_again.gen_f64_in(0.0, 1.0));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable RNG injected into the layout engine.
///
/// Uses ChaCha8 for speed while keeping a reproducible, portable stream.
#[derive(Clone, Debug)]
pub struct LayoutRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl LayoutRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is still recorded, so a surprising layout can be replayed
    /// with [`LayoutRng::new`] afterwards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// re-render a deck with fresh layouts while staying reproducible.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(GOLDEN_GAMMA));
        Self::new(fork_seed)
    }

    /// Create the independent stream used for the card at `index`.
    ///
    /// Depends only on the seed and the index, never on how much of this
    /// RNG has been consumed.
    #[must_use]
    pub fn for_card(&self, index: usize) -> Self {
        Self::new(splitmix64(self.seed ^ (index as u64).wrapping_mul(GOLDEN_GAMMA)))
    }

    /// Draw a value uniformly from `[low, high]`.
    ///
    /// Degenerate ranges (`low == high`) return `low`.
    pub fn gen_f64_in(&mut self, low: f64, high: f64) -> f64 {
        if low == high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> LayoutRngState {
        LayoutRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &LayoutRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Serializable RNG state for replaying a layout.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
