//! Zone system for card locations.
//!
//! Every card lives in exactly one of three zones: the face-down deck,
//! the hand in play, or the discard pile of matched sets.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, hand, or discard
//! - `ZoneManager`: Card location tracking and movement
//! - `ZonePosition`: Position specifier for insertion

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
