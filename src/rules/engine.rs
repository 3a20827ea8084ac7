//! Rules engine trait.
//!
//! Games implement `RulesEngine` to expose:
//! - What actions are legal
//! - How actions modify state
//! - When the game is over
//!
//! Bots and replay drivers only talk to this trait.

use crate::core::action::Action;
use crate::core::config::GameConfig;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Matched sets moved to the discard.
    pub sets_cleared: usize,
    /// Cards left in the hand with no Set among them.
    pub cards_left: usize,
}

impl GameResult {
    /// Check if every card was cleared.
    #[must_use]
    pub fn is_clean_sweep(&self) -> bool {
        self.cards_left == 0
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: never includes `NewGame`; restarting is always possible
/// - `apply_action`: must be deterministic for a given RNG state
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate the actions that can change the table.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action.
    fn apply_action(&mut self, action: &Action);

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if an action is currently legal.
    fn is_legal(&self, action: &Action) -> bool {
        matches!(action, Action::NewGame) || self.legal_actions().contains(action)
    }
}
