//! # set-engine
//!
//! Rule engine for the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Exclusive Ownership**: The engine is the only writer of the deck,
//!    hand and discard. Callers get cloned snapshots, never references
//!    into live state.
//!
//! 2. **Total Intents**: `choose`, `deal_more` and `new_game` accept any
//!    input. Unknown cards and empty decks are no-ops, not errors.
//!
//! 3. **Reproducible Shuffles**: All randomness flows through a seeded
//!    `GameRng`, so a seed and an action history replay a session exactly.
//!
//! ## Quick Start
//!
//! ```
//! use set_engine::engine::SetGame;
//!
//! let mut game = SetGame::with_seed(7);
//! assert_eq!(game.hand().len(), 12);
//!
//! if let Some([a, b, c]) = game.hint() {
//!     game.choose(a);
//!     game.choose(b);
//!     game.choose(c);
//!     assert_eq!(game.hand().iter().filter(|card| card.is_matched()).count(), 3);
//!
//!     game.deal_more();
//!     assert_eq!(game.discard().len(), 3);
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Card ids, state, actions, RNG, configuration
//! - `zones`: Deck/hand/discard membership and ordering
//! - `cards`: Attributes, cards, deck construction
//! - `rules`: The Set predicate and the `RulesEngine` trait
//! - `events`: Change notices for renderers
//! - `engine`: `SetGame`, the selection state machine

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    CardId, DECK_SIZE,
    GameRng, GameRngState,
    GameConfig,
    Action, ActionRecord,
    PublicState, GameState, TableView,
};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::cards::{build_deck, shuffle, Attribute, AttributeValue, Card, EvaluationMark};

pub use crate::rules::{find_sets, is_set, third_card, GameResult, RulesEngine};

pub use crate::events::{ChangeNotice, GameEvent, ListenerRegistry, SubscriptionId};

pub use crate::engine::{SetGame, SetGameBuilder};
