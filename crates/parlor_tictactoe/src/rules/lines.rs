//! The eight ways to win.

use crate::Position::{self, *};

/// Three positions that win when they carry the same marker.
pub type WinningLine = [Position; 3];

/// Every winning line: rows, then columns, then diagonals.
///
/// Scans walk this order, so it is also the tie-break when more than one
/// line qualifies.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [TopLeft, TopCenter, TopRight],
    [MiddleLeft, Center, MiddleRight],
    [BottomLeft, BottomCenter, BottomRight],
    // Columns
    [TopLeft, MiddleLeft, BottomLeft],
    [TopCenter, Center, BottomCenter],
    [TopRight, MiddleRight, BottomRight],
    // Diagonals
    [TopLeft, Center, BottomRight],
    [TopRight, Center, BottomLeft],
];
