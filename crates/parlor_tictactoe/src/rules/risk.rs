//! Squares that would complete a line.

use super::WINNING_LINES;
use crate::{Board, Marker, Position};
use tracing::{debug, instrument};

/// Finds an open square that completes a line for `marker`.
///
/// A line qualifies when two of its squares carry `marker` and the third is
/// empty. The first qualifying line in [`WINNING_LINES`] order answers.
/// Passing the robot's marker finds a winning move; passing the human's
/// finds a square to block.
#[instrument]
pub fn find_at_risk_square(board: &Board, marker: Marker) -> Option<Position> {
    for line in WINNING_LINES {
        let mut own = 0;
        let mut open = None;
        for pos in line {
            match board.get(pos).marker() {
                Some(m) if m == marker => own += 1,
                Some(_) => {}
                None => open = Some(pos),
            }
        }
        if own == 2 && let Some(pos) = open {
            debug!(?line, position = %pos, "At-risk square found");
            return Some(pos);
        }
    }

    None
}

/// Whether any square completes a line for `marker`.
pub fn at_risk_square(board: &Board, marker: Marker) -> bool {
    find_at_risk_square(board, marker).is_some()
}
