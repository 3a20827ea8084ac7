//! Seeded shuffling.
//!
//! A session owns one `GameRng`. Every deal takes a fresh table stream
//! from it with [`GameRng::fork`], so the session seed alone decides every
//! deck order in the session, and a captured [`GameRngState`] decides
//! every deck order after the capture.
//!
//! ```
//! use set_engine::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//! let mut first: Vec<u8> = (0..81).collect();
//! session.fork().shuffle(&mut first);
//!
//! let mut replay = GameRng::new(42);
//! let mut again: Vec<u8> = (0..81).collect();
//! replay.fork().shuffle(&mut again);
//!
//! assert_eq!(first, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local OS-backed generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the seed of a new stream from this one.
    ///
    /// Successive forks differ; the n-th fork of a seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Uniform permutation in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Rebuild a stream at a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Where a `GameRng` stream stands, for saving a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}
