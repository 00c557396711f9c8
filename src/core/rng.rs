//! Deterministic random number generation for the image shuffle.
//!
//! A session shuffles its image sequence exactly once, at start, and the
//! order stays fixed for the rest of the game. Seeding the shuffle keeps
//! sessions replayable: the same seed over the same topic produces the
//! same image order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used for the one-time image shuffle.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
///
/// ```
/// use showcase_duel::core::GameRng;
///
/// let mut a = GameRng::new(7);
/// let mut b = GameRng::new(7);
///
/// let mut xs = vec![1, 2, 3, 4, 5];
/// let mut ys = xs.clone();
/// a.shuffle(&mut xs);
/// b.shuffle(&mut ys);
/// assert_eq!(xs, ys);
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how much
/// randomness has been consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
