//! Draw detection logic for tic-tac-toe.

use super::win::winning_marker;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no complete line.
#[instrument]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && winning_marker(board).is_none()
}
