//! Cumulative score across rounds.

use super::Side;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Points per side plus the target that ends the game.
///
/// Scores are values: awarding a point returns a new `Score` and leaves
/// the old one untouched, so a controller can only change the tally
/// through [`Score::award`] and [`Score::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    player: u32,
    computer: u32,
    target: u32,
}

impl Score {
    /// Creates a zeroed score that ends at `target` points.
    #[instrument]
    pub fn new(target: u32) -> Self {
        Self::with_points(0, 0, target)
    }

    /// Creates a score with explicit points.
    ///
    /// Used to restore a tally or to set up a board position in tests.
    pub fn with_points(player: u32, computer: u32, target: u32) -> Self {
        Self {
            player,
            computer,
            target,
        }
    }

    /// Points held by the human.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Points held by the robot.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Points needed to win the game.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Points held by `side`.
    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    /// Returns a new score with one more point for `side`.
    #[must_use]
    #[instrument]
    pub fn award(self, side: Side) -> Self {
        match side {
            Side::Player => Self {
                player: self.player.saturating_add(1),
                ..self
            },
            Side::Computer => Self {
                computer: self.computer.saturating_add(1),
                ..self
            },
        }
    }

    /// Returns a zeroed score with the same target.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.target)
    }

    /// Returns the side that reached the target first, if any.
    ///
    /// Both sides sitting exactly on the target is not a grand winner.
    /// Points only ever arrive one at a time so the state should not occur,
    /// but a restored or hand-edited tally can produce it and the game then
    /// keeps going.
    #[instrument]
    pub fn grand_winner(&self) -> Option<Side> {
        if self.player == self.target && self.computer == self.target {
            None
        } else if self.player >= self.target {
            Some(Side::Player)
        } else if self.computer >= self.target {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Whether the game has a grand winner.
    pub fn is_grand_winner(&self) -> bool {
        self.grand_winner().is_some()
    }
}
