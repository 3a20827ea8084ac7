//! Rules: the Set predicate and the rules engine trait.
//!
//! `evaluation` holds the pure rule (is this triple a Set, which card
//! completes a pair, which Sets are on the table). `engine` holds the
//! `RulesEngine` trait that game drivers program against.

pub mod engine;
pub mod evaluation;

pub use engine::{GameResult, RulesEngine};
pub use evaluation::{attribute_matches, distinct_values, evaluate, find_sets, is_set, third_card};
