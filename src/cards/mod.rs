//! Card system: attributes, card instances, and deck construction.
//!
//! ## Key Types
//!
//! - `AttributeValue`: One of three values for a visual attribute
//! - `Attribute`: Shape, number, shading, or color
//! - `EvaluationMark`: Outcome of evaluating a selected triple
//! - `Card`: A card's identity, attributes, and selection state
//!
//! `build_deck` and `shuffle` produce the 81-card starting deck.

pub mod attributes;
pub mod deck;
pub mod instance;

pub use attributes::{Attribute, AttributeValue, EvaluationMark};
pub use deck::{build_deck, shuffle};
pub use instance::Card;
