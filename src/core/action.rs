//! Player intents and the action history.
//!
//! The presentation layer drives the engine with three intents: choose a
//! card, deal more cards, or start a new game. Every intent the engine
//! applies is recorded as an `ActionRecord` for replay and debugging.

use serde::{Deserialize, Serialize};

use super::entity::CardId;

/// A player intent.
///
/// ```
/// use set_engine::core::{Action, CardId};
///
/// let choose = Action::Choose(CardId::new(5));
/// assert_eq!(choose.card(), Some(CardId::new(5)));
/// assert_eq!(Action::DealMore.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Toggle or start a selection with a card in the hand.
    Choose(CardId),
    /// Replace a matched set or add cards to the hand.
    DealMore,
    /// Throw away the current table and deal a fresh game.
    NewGame,
}

impl Action {
    /// The card this action points at, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::Choose(id) => Some(*id),
            Action::DealMore | Action::NewGame => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Choose(id) => write!(f, "Choose({})", id.0),
            Action::DealMore => write!(f, "DealMore"),
            Action::NewGame => write!(f, "NewGame"),
        }
    }
}

/// A recorded action with its position in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Game number within the session (starts at 1, bumped by `NewGame`).
    pub game: u32,

    /// Sequence number across the session (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, game: u32, sequence: u32) -> Self {
        Self {
            action,
            game,
            sequence,
        }
    }
}
