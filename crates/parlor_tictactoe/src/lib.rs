//! Tic-tac-toe game logic with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Marker`], [`Square`], [`Position`] and [`Board`]
//! - **Rules**: the eight winning lines, win detection and at-risk squares
//! - **Strategy**: the robot's greedy move picker
//! - **Game**: rounds, score and replay as value transitions
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Marker, Position, rules};
//!
//! let x = Marker::human("x").unwrap();
//! let mut board = Board::new();
//! board.place(Position::TopLeft, x);
//! board.place(Position::TopCenter, x);
//! assert_eq!(rules::find_at_risk_square(&board, x), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use game::{
    DEFAULT_TARGET, FirstMover, ParseFirstMoverError, PlaceError, Placement, RoundReport,
    RoundResult, TicTacToeGame,
};
pub use position::{Position, PositionError};
pub use strategy::Decision;
pub use types::{Board, Marker, MarkerError, Square};
