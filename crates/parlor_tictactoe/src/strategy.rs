//! The robot's move picker.
//!
//! A fixed priority list, checked top to bottom:
//!
//! 1. complete one of its own lines,
//! 2. block one of the opponent's lines,
//! 3. take the center,
//! 4. anything open, uniformly at random.
//!
//! There is no look-ahead, so forks beat it.

use super::rules::find_at_risk_square;
use super::{Board, Marker, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule picked the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Decision {
    /// Completes the robot's own line.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// Center square.
    #[display("center")]
    Center,
    /// Random open square.
    #[display("random")]
    Random,
}

/// Picks a square and reports which rule chose it.
///
/// Returns `None` only when the board is full.
#[instrument(skip(rng))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<(Position, Decision)> {
    let pick = if let Some(pos) = find_at_risk_square(board, own) {
        Some((pos, Decision::Win))
    } else if let Some(pos) = find_at_risk_square(board, opponent) {
        Some((pos, Decision::Block))
    } else if board.center_open() {
        Some((Position::Center, Decision::Center))
    } else {
        board
            .unmarked()
            .choose(rng)
            .map(|&pos| (pos, Decision::Random))
    };

    if let Some((pos, decision)) = pick {
        debug!(position = %pos, %decision, "Robot picked square");
    }
    pick
}

/// Picks the robot's next square.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Position> {
    decide(board, own, opponent, rng).map(|(pos, _)| pos)
}
