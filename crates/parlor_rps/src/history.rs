//! Per-game record of every move played.

use super::Choice;
use serde::{Deserialize, Serialize};

/// Append-only move log for both sides.
///
/// Entries line up by round: index `n` of each list is round `n + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    player: Vec<Choice>,
    computer: Vec<Choice>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the history with one more round appended.
    #[must_use]
    pub fn record(mut self, player: Choice, computer: Choice) -> Self {
        self.player.push(player);
        self.computer.push(computer);
        self
    }

    /// Moves the human played, oldest first.
    pub fn player(&self) -> &[Choice] {
        &self.player
    }

    /// Moves the robot played, oldest first.
    pub fn computer(&self) -> &[Choice] {
        &self.computer
    }

    /// Number of rounds recorded.
    pub fn len(&self) -> usize {
        self.player.len()
    }

    /// Whether no round has been recorded.
    pub fn is_empty(&self) -> bool {
        self.player.is_empty()
    }
}
