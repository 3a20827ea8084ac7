//! The Set engine.
//!
//! `SetGame` owns the deck, hand and discard and runs the selection state
//! machine:
//! - Choosing toggles cards until three are selected
//! - The third selection is judged at once (Set or not)
//! - The next choice clears the judged triple, discarding a matched Set
//! - `deal_more` replaces a matched Set or adds three cards
//!
//! Callers read snapshots (`hand`, `deck`, `discard`, `view`) after each
//! intent, or subscribe to be told when to.

mod game;

pub use game::{SetGame, SetGameBuilder};
