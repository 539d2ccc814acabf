//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the robot's strategy and the game
//! controller share one definition of a line.

pub mod draw;
pub mod lines;
pub mod risk;
pub mod win;

pub use draw::{is_full, is_tie};
pub use lines::{WINNING_LINES, WinningLine};
pub use risk::{at_risk_square, find_at_risk_square};
pub use win::{someone_won, winning_marker};
