//! Card identification.
//!
//! Every card in the deck has a unique `CardId` in `0..DECK_SIZE`.
//!
//! ## ID Layout
//!
//! The id is the card's attributes read as a base-3 number, most significant
//! digit first: `shape * 27 + number * 9 + shading * 3 + color`.
//!
//! ```
//! use set_engine::core::CardId;
//!
//! let card = CardId::new(80);
//! assert_eq!(card.digits(), [2, 2, 2, 2]);
//! assert_eq!(CardId::from_digits([1, 0, 2, 1]), CardId::new(34));
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck (3^4).
pub const DECK_SIZE: usize = 81;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Build the id for four base-3 attribute digits.
    ///
    /// Panics if any digit is not in `0..3`.
    #[must_use]
    pub fn from_digits(digits: [u8; 4]) -> Self {
        let raw = digits.iter().fold(0u8, |acc, &d| {
            assert!(d < 3, "Attribute digit {} out of range", d);
            acc * 3 + d
        });
        Self(raw)
    }

    /// Split the id into its four base-3 digits (shape, number, shading, color).
    #[must_use]
    pub const fn digits(self) -> [u8; 4] {
        let id = self.0;
        [id / 27 % 3, id / 9 % 3, id / 3 % 3, id % 3]
    }

    /// Check that the id lies within the deck.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < DECK_SIZE
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into per-card storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every card id in the deck, in ascending order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl From<u8> for CardId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
