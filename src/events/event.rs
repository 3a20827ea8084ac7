//! Game event types.
//!
//! Events describe what a single intent did to the table. One intent can
//! produce several events (a fourth choice clears the old selection,
//! discards a matched set, deals replacements and selects the new card).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::EvaluationMark;
use crate::core::{ActionRecord, CardId};

/// Something that happened to the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card joined the selection.
    Selected(CardId),

    /// A card left the selection.
    Deselected(CardId),

    /// Three selected cards were judged.
    Evaluated {
        cards: [CardId; 3],
        mark: EvaluationMark,
    },

    /// A judged selection was dropped to start a new one.
    SelectionCleared(SmallVec<[CardId; 3]>),

    /// A matched set moved from the hand to the discard.
    SetDiscarded(SmallVec<[CardId; 3]>),

    /// Cards moved from the deck into the hand.
    Dealt(Vec<CardId>),

    /// A fresh table was dealt.
    GameStarted { game: u32 },
}

impl GameEvent {
    /// Check if this event moved cards between zones.
    #[must_use]
    pub fn moves_cards(&self) -> bool {
        matches!(
            self,
            GameEvent::SetDiscarded(_) | GameEvent::Dealt(_) | GameEvent::GameStarted { .. }
        )
    }
}

/// Everything one intent changed, delivered to subscribers once per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotice {
    /// The recorded action.
    pub record: ActionRecord,

    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
}

impl ChangeNotice {
    /// Create a notice.
    #[must_use]
    pub fn new(record: ActionRecord, events: Vec<GameEvent>) -> Self {
        Self { record, events }
    }

    /// Check if any event moved cards between zones.
    #[must_use]
    pub fn moves_cards(&self) -> bool {
        self.events.iter().any(GameEvent::moves_cards)
    }
}
