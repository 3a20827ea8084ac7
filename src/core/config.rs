//! Game configuration.
//!
//! The standard game deals a 12-card table and adds cards three at a time.
//! Both numbers are configured here rather than hardcoded in the engine.

use serde::{Deserialize, Serialize};

use super::entity::DECK_SIZE;

/// Cards on the table at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 12;

/// Cards added by a single deal, and cards in a Set.
pub const DEFAULT_DEAL_SIZE: usize = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Target number of cards in the hand. New games deal this many.
    pub hand_size: usize,

    /// Maximum cards added to the hand by one `deal_more` without a match.
    pub deal_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            deal_size: DEFAULT_DEAL_SIZE,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Hand size must be at least 1");
        assert!(hand_size <= DECK_SIZE, "Hand size cannot exceed the deck");
        self.hand_size = hand_size;
        self
    }

    /// Set the number of cards dealt by `deal_more`.
    #[must_use]
    pub fn with_deal_size(mut self, deal_size: usize) -> Self {
        assert!(deal_size > 0, "Deal size must be at least 1");
        self.deal_size = deal_size;
        self
    }

    /// Deck size left after the opening deal.
    #[must_use]
    pub fn initial_deck_size(&self) -> usize {
        DECK_SIZE - self.hand_size
    }
}
