//! Deck construction and shuffling.
//!
//! The standard deck holds one card for every combination of the four
//! ternary attributes: 3^4 = 81 cards, each exactly once.

use super::instance::Card;
use crate::core::entity::{CardId, DECK_SIZE};
use crate::core::rng::GameRng;

/// Build the full deck in id order.
///
/// Card `i` carries the base-3 digits of `i` as its attributes, so the
/// enumeration is exhaustive and duplicate-free by construction.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let deck: Vec<Card> = CardId::all().map(Card::from_id).collect();
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// Shuffle a deck in place. Only the order changes.
pub fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(deck);
}
