//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone every card is in and the order of
//! cards within each zone. It supports:
//! - Card lookup by id
//! - Movement between zones with explicit position control
//! - Drawing from the top of the deck
//!
//! For the deck, index 0 is the bottom and the last index is the top.
//! For the hand and discard, order is display order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::rng::GameRng;

/// The three collections that partition the cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down cards not yet dealt.
    Deck,
    /// Face-up cards in play.
    Hand,
    /// Cards removed as matched sets.
    Discard,
}

impl Zone {
    /// All zones.
    pub const ALL: [Zone; 3] = [Zone::Deck, Zone::Hand, Zone::Discard];

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "Deck",
            Zone::Hand => "Hand",
            Zone::Discard => "Discard",
        };
        f.write_str(name)
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to the top of the zone (end of the ordering).
    Top,
    /// Insert at a specific index, clamped to the zone length.
    Index(usize),
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use set_engine::core::CardId;
/// use set_engine::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut manager = ZoneManager::new();
///
/// manager.add_to_zone(CardId(10), Zone::Deck, ZonePosition::Top);
/// manager.add_to_zone(CardId(11), Zone::Deck, ZonePosition::Top);
///
/// // Deal the top card into the hand
/// let dealt = manager.pop_top(Zone::Deck).unwrap();
/// manager.add_to_zone(dealt, Zone::Hand, ZonePosition::Top);
///
/// assert_eq!(dealt, CardId(11));
/// assert_eq!(manager.cards_in_zone(Zone::Hand), &[CardId(11)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: card id -> zone
    locations: FxHashMap<CardId, Zone>,

    /// Ordered card lists, one per zone.
    zone_order: [Vec<CardId>; 3],
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an untracked card to a zone.
    ///
    /// Panics if the card is already in the manager.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        if self.locations.contains_key(&card) {
            panic!("{} already exists in zone manager", card);
        }

        self.locations.insert(card, zone);
        Self::insert(&mut self.zone_order[zone.slot()], card, position);
    }

    /// Move a card from its zone to another.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, card: CardId, new_zone: Zone, position: ZonePosition) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;

        self.zone_order[old_zone.slot()].retain(|&c| c != card);
        self.locations.insert(card, new_zone);
        Self::insert(&mut self.zone_order[new_zone.slot()], card, position);

        Some(old_zone)
    }

    fn insert(order: &mut Vec<CardId>, card: CardId, position: ZonePosition) {
        match position {
            ZonePosition::Top => order.push(card),
            ZonePosition::Index(i) => {
                let idx = i.min(order.len());
                order.insert(idx, card);
            }
        }
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Index of a card within its zone ordering.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        let zone = self.get_zone(card)?;
        self.zone_order[zone.slot()].iter().position(|&c| c == card)
    }

    /// Get the cards in a zone, in order.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        &self.zone_order[zone.slot()]
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone_order[zone.slot()].len()
    }

    /// Get the top card of a zone (last in the ordering).
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<CardId> {
        self.zone_order[zone.slot()].last().copied()
    }

    /// Remove and return the top card of a zone.
    ///
    /// The card is no longer tracked until it is added to a zone again.
    pub fn pop_top(&mut self, zone: Zone) -> Option<CardId> {
        let card = self.zone_order[zone.slot()].pop()?;
        self.locations.remove(&card);
        Some(card)
    }

    /// Shuffle a zone.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        rng.shuffle(&mut self.zone_order[zone.slot()]);
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(CardId(10), Zone::Hand, ZonePosition::Top);
        manager.add_to_zone(CardId(11), Zone::Deck, ZonePosition::Top);

        assert_eq!(manager.get_zone(CardId(10)), Some(Zone::Hand));
        assert_eq!(manager.get_zone(CardId(11)), Some(Zone::Deck));
        assert_eq!(manager.get_zone(CardId(99)), None);
        assert!(manager.is_in_zone(CardId(10), Zone::Hand));
        assert!(!manager.is_in_zone(CardId(10), Zone::Deck));
    }

    #[test]
    fn test_ordering() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(CardId(10), Zone::Deck, ZonePosition::Top);
        manager.add_to_zone(CardId(11), Zone::Deck, ZonePosition::Index(0));
        manager.add_to_zone(CardId(12), Zone::Deck, ZonePosition::Top);

        assert_eq!(manager.cards_in_zone(Zone::Deck), &[CardId(11), CardId(10), CardId(12)]);
        assert_eq!(manager.top_card(Zone::Deck), Some(CardId(12)));
        assert_eq!(manager.position(CardId(10)), Some(1));
        assert_eq!(manager.position(CardId(99)), None);
    }

    #[test]
    fn test_index_is_clamped() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(CardId(1), Zone::Hand, ZonePosition::Top);
        manager.add_to_zone(CardId(2), Zone::Hand, ZonePosition::Index(50));

        assert_eq!(manager.cards_in_zone(Zone::Hand), &[CardId(1), CardId(2)]);
    }

    #[test]
    fn test_move_between_zones() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(CardId(10), Zone::Hand, ZonePosition::Top);
        manager.add_to_zone(CardId(11), Zone::Hand, ZonePosition::Top);

        let old = manager.move_to_zone(CardId(10), Zone::Discard, ZonePosition::Top);

        assert_eq!(old, Some(Zone::Hand));
        assert_eq!(manager.get_zone(CardId(10)), Some(Zone::Discard));
        assert_eq!(manager.cards_in_zone(Zone::Hand), &[CardId(11)]);
        assert_eq!(manager.zone_size(Zone::Discard), 1);
    }

    #[test]
    fn test_move_unknown_card() {
        let mut manager = ZoneManager::new();
        assert_eq!(manager.move_to_zone(CardId(3), Zone::Hand, ZonePosition::Top), None);
        assert_eq!(manager.total_cards(), 0);
    }

    #[test]
    fn test_pop_top() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(CardId(10), Zone::Deck, ZonePosition::Top);
        manager.add_to_zone(CardId(11), Zone::Deck, ZonePosition::Top);

        assert_eq!(manager.pop_top(Zone::Deck), Some(CardId(11)));
        assert!(!manager.contains(CardId(11)));
        assert_eq!(manager.pop_top(Zone::Deck), Some(CardId(10)));
        assert_eq!(manager.pop_top(Zone::Deck), None);
    }

    #[test]
    fn test_shuffle() {
        let mut manager = ZoneManager::new();
        for id in CardId::all() {
            manager.add_to_zone(id, Zone::Deck, ZonePosition::Top);
        }

        let before = manager.cards_in_zone(Zone::Deck).to_vec();
        manager.shuffle_zone(Zone::Deck, &mut GameRng::new(42));
        let mut after = manager.cards_in_zone(Zone::Deck).to_vec();

        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_card_panics() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(CardId(10), Zone::Hand, ZonePosition::Top);
        manager.add_to_zone(CardId(10), Zone::Deck, ZonePosition::Top);
    }

    #[test]
    fn test_zone_display() {
        let names: Vec<_> = Zone::ALL.iter().map(|z| z.to_string()).collect();
        assert_eq!(names, vec!["Deck", "Hand", "Discard"]);
    }
}
