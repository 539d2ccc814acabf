//! Win detection logic for tic-tac-toe.

use super::WINNING_LINES;
use crate::{Board, Marker, Square};
use tracing::instrument;

/// Returns the marker holding a complete line, if any.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete one
/// answers.
#[instrument]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.marker();
        }
    }

    None
}

/// Whether any line is complete.
pub fn someone_won(board: &Board) -> bool {
    winning_marker(board).is_some()
}
