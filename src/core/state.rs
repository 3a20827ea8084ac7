//! Game state: session history and the table.
//!
//! ## PublicState
//!
//! Survives `NewGame`:
//! - Game number and action sequence
//! - Action history
//!
//! ## GameState
//!
//! One game's table, rebuilt from scratch on every new game:
//! - Card instances (indexed by id)
//! - Zone manager (deck, hand, discard membership and order)
//!
//! ## TableView
//!
//! Immutable snapshot of the table handed to renderers.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::config::GameConfig;
use super::entity::{CardId, DECK_SIZE};
use super::rng::GameRng;
use crate::cards::{build_deck, shuffle, Card};
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// Session-wide state.
///
/// Uses `im::Vector` so cloning the history is O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicState {
    /// Current game number (starts at 1).
    pub game_number: u32,

    /// Sequence number of the next recorded action.
    pub action_sequence: u32,

    /// Every applied action, oldest first.
    pub action_history: Vector<ActionRecord>,
}

impl Default for PublicState {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicState {
    /// Create state for a session whose first game is already dealt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            game_number: 1,
            action_sequence: 0,
            action_history: Vector::new(),
        }
    }

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    /// Advance to the next game.
    pub fn start_game(&mut self) {
        self.game_number += 1;
    }
}

/// Snapshot of the table, for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Cards in play, in display order.
    pub hand: Vec<Card>,
    /// Undealt cards, bottom first.
    pub deck: Vec<Card>,
    /// Matched sets, oldest first.
    pub discard: Vec<Card>,
}

impl TableView {
    /// Check if there is nothing left to deal.
    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Total cards across all three zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.deck.len() + self.discard.len()
    }
}

/// The cards and their zones for one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Zone manager for card locations.
    pub zones: ZoneManager,

    /// Card instances, indexed by `CardId`.
    cards: Vec<Card>,
}

impl GameState {
    /// Build and shuffle a fresh deck, then deal the opening hand.
    #[must_use]
    pub fn deal_new(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut deck = build_deck();
        shuffle(&mut deck, rng);

        let mut zones = ZoneManager::new();
        for card in &deck {
            zones.add_to_zone(card.id, Zone::Deck, ZonePosition::Top);
        }

        deck.sort_by_key(|c| c.id);
        let mut state = Self { zones, cards: deck };
        state.deal(config.hand_size);
        state
    }

    // === Cards ===

    /// Get a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Get a mutable card.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Check if a card is in the hand.
    #[must_use]
    pub fn in_hand(&self, id: CardId) -> bool {
        self.zones.is_in_zone(id, Zone::Hand)
    }

    /// Copy the cards of a zone, in zone order.
    #[must_use]
    pub fn snapshot(&self, zone: Zone) -> Vec<Card> {
        self.zones
            .cards_in_zone(zone)
            .iter()
            .filter_map(|&id| self.card(id).cloned())
            .collect()
    }

    /// Snapshot every zone.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView {
            hand: self.snapshot(Zone::Hand),
            deck: self.snapshot(Zone::Deck),
            discard: self.snapshot(Zone::Discard),
        }
    }

    // === Hand queries ===

    fn hand_where(&self, pred: impl Fn(&Card) -> bool) -> SmallVec<[CardId; 3]> {
        self.zones
            .cards_in_zone(Zone::Hand)
            .iter()
            .copied()
            .filter(|&id| self.card(id).map_or(false, &pred))
            .collect()
    }

    /// Selected hand cards, in hand order.
    #[must_use]
    pub fn selected(&self) -> SmallVec<[CardId; 3]> {
        self.hand_where(|c| c.selected)
    }

    /// Hand cards marked as a matched Set, in hand order.
    #[must_use]
    pub fn matched(&self) -> SmallVec<[CardId; 3]> {
        self.hand_where(Card::is_matched)
    }

    // === Movement ===

    /// Deal up to `count` cards from the top of the deck onto the hand.
    ///
    /// Returns the dealt cards; fewer than `count` once the deck runs out.
    pub fn deal(&mut self, count: usize) -> Vec<CardId> {
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(id) = self.zones.pop_top(Zone::Deck) else {
                break;
            };
            self.zones.add_to_zone(id, Zone::Hand, ZonePosition::Top);
            if let Some(card) = self.card_mut(id) {
                card.reset();
            }
            dealt.push(id);
        }
        dealt
    }

    /// Move the matched Set from the hand to the discard.
    ///
    /// Each vacated slot is refilled in place from the deck while the deck
    /// has cards and the hand is below `refill_below` (no limit if `None`).
    /// Slots that are not refilled close up.
    ///
    /// Returns the discarded cards and the replacements.
    pub fn discard_matched(&mut self, refill_below: Option<usize>) -> (SmallVec<[CardId; 3]>, Vec<CardId>) {
        let matched = self.matched();
        let mut dealt = Vec::new();

        for &id in &matched {
            let Some(slot) = self.zones.position(id) else {
                continue;
            };
            self.zones.move_to_zone(id, Zone::Discard, ZonePosition::Top);
            if let Some(card) = self.card_mut(id) {
                card.reset();
            }

            let hand_size = self.zones.zone_size(Zone::Hand);
            if refill_below.map_or(true, |limit| hand_size < limit) {
                if let Some(new_id) = self.zones.pop_top(Zone::Deck) {
                    self.zones.add_to_zone(new_id, Zone::Hand, ZonePosition::Index(slot));
                    if let Some(card) = self.card_mut(new_id) {
                        card.reset();
                    }
                    dealt.push(new_id);
                }
            }
        }

        (matched, dealt)
    }

    /// Check that every card is tracked in exactly one zone.
    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        let sizes: usize = Zone::ALL.iter().map(|&z| self.zones.zone_size(z)).sum();
        sizes == DECK_SIZE
            && self.zones.total_cards() == DECK_SIZE
            && CardId::all().all(|id| self.zones.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::EvaluationMark;
    use crate::core::action::Action;

    fn fresh() -> GameState {
        GameState::deal_new(&GameConfig::default(), &mut GameRng::new(42))
    }

    #[test]
    fn test_public_state_new() {
        let state = PublicState::new();

        assert_eq!(state.game_number, 1);
        assert_eq!(state.action_sequence, 0);
        assert!(state.action_history.is_empty());
    }

    #[test]
    fn test_record_actions() {
        let mut state = PublicState::new();

        let seq = state.next_sequence();
        state.record_action(ActionRecord::new(Action::DealMore, state.game_number, seq));
        state.start_game();
        let seq = state.next_sequence();
        state.record_action(ActionRecord::new(Action::NewGame, state.game_number, seq));

        assert_eq!(state.action_history.len(), 2);
        assert_eq!(state.action_history[1].game, 2);
        assert_eq!(state.action_history[1].sequence, 1);
    }

    #[test]
    fn test_deal_new() {
        let state = fresh();

        assert_eq!(state.zones.zone_size(Zone::Hand), 12);
        assert_eq!(state.zones.zone_size(Zone::Deck), 69);
        assert_eq!(state.zones.zone_size(Zone::Discard), 0);
        assert!(state.is_partitioned());
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_deal_new_is_deterministic() {
        let a = GameState::deal_new(&GameConfig::default(), &mut GameRng::new(9));
        let b = GameState::deal_new(&GameConfig::default(), &mut GameRng::new(9));

        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn test_card_lookup_by_id() {
        let state = fresh();

        for id in CardId::all() {
            assert_eq!(state.card(id).map(|c| c.id), Some(id));
        }
        assert!(state.card(CardId(81)).is_none());
    }

    #[test]
    fn test_deal_from_top() {
        let mut state = fresh();
        let top = state.zones.top_card(Zone::Deck);

        let dealt = state.deal(3);

        assert_eq!(dealt.len(), 3);
        assert_eq!(dealt.first().copied(), top);
        assert_eq!(state.zones.zone_size(Zone::Hand), 15);
        assert_eq!(&state.zones.cards_in_zone(Zone::Hand)[12..], dealt.as_slice());
    }

    #[test]
    fn test_deal_stops_at_empty_deck() {
        let mut state = fresh();

        let dealt = state.deal(100);

        assert_eq!(dealt.len(), 69);
        assert_eq!(state.zones.zone_size(Zone::Deck), 0);
        assert!(state.deal(3).is_empty());
    }

    #[test]
    fn test_discard_matched_refills_in_place() {
        let mut state = fresh();
        let hand = state.zones.cards_in_zone(Zone::Hand).to_vec();
        for &id in &[hand[1], hand[4], hand[9]] {
            state.card_mut(id).unwrap().mark = EvaluationMark::Set;
        }

        let (discarded, dealt) = state.discard_matched(None);

        assert_eq!(discarded.as_slice(), &[hand[1], hand[4], hand[9]]);
        assert_eq!(dealt.len(), 3);
        let new_hand = state.zones.cards_in_zone(Zone::Hand);
        assert_eq!(new_hand.len(), 12);
        assert_eq!(new_hand[1], dealt[0]);
        assert_eq!(new_hand[4], dealt[1]);
        assert_eq!(new_hand[9], dealt[2]);
        assert_eq!(state.zones.cards_in_zone(Zone::Discard), discarded.as_slice());
        assert!(state.snapshot(Zone::Discard).iter().all(|c| !c.is_matched()));
        assert!(state.is_partitioned());
    }

    #[test]
    fn test_discard_matched_respects_refill_limit() {
        let mut state = fresh();
        state.deal(3);
        let hand = state.zones.cards_in_zone(Zone::Hand).to_vec();
        for &id in &hand[..3] {
            state.card_mut(id).unwrap().mark = EvaluationMark::Set;
        }

        let (discarded, dealt) = state.discard_matched(Some(12));

        assert_eq!(discarded.len(), 3);
        assert!(dealt.is_empty());
        assert_eq!(state.zones.cards_in_zone(Zone::Hand), &hand[3..]);
    }

    #[test]
    fn test_discard_matched_without_deck() {
        let mut state = fresh();
        state.deal(69);
        let hand = state.zones.cards_in_zone(Zone::Hand).to_vec();
        for &id in &hand[..3] {
            state.card_mut(id).unwrap().mark = EvaluationMark::Set;
        }

        let (discarded, dealt) = state.discard_matched(None);

        assert_eq!(discarded.len(), 3);
        assert!(dealt.is_empty());
        assert_eq!(state.zones.zone_size(Zone::Hand), 78);
        assert!(state.is_partitioned());
    }

    #[test]
    fn test_view() {
        let view = fresh().view();

        assert_eq!(view.card_count(), DECK_SIZE);
        assert!(!view.is_deck_empty());
        assert!(view.hand.iter().all(|c| !c.selected && c.mark == EvaluationMark::Unevaluated));
    }

    #[test]
    fn test_view_serialization() {
        let view = fresh().view();

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: TableView = serde_json::from_str(&json).unwrap();

        assert_eq!(view, deserialized);
    }
}
