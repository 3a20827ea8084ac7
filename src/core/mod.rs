//! Core engine types: card ids, state, actions, RNG, configuration.
//!
//! This module contains the building blocks the engine is assembled from.
//! Games configure hand and deal sizes via `GameConfig` rather than
//! modifying the core.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{CardId, DECK_SIZE};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_DEAL_SIZE, DEFAULT_HAND_SIZE};
pub use action::{Action, ActionRecord};
pub use state::{GameState, PublicState, TableView};
