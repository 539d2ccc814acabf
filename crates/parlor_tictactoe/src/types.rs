//! Core domain types for tic-tac-toe.

use super::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol a player leaves on the board.
///
/// The robot always plays [`Marker::COMPUTER`]; the human picks one of
/// [`Marker::HUMAN_CHOICES`], none of which collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct Marker(char);

impl Marker {
    /// The robot's marker.
    pub const COMPUTER: Marker = Marker('O');

    /// Symbols a human may play with.
    pub const HUMAN_CHOICES: [char; 4] = ['X', '*', 'P', '+'];

    /// Parses the human's marker choice.
    ///
    /// Letters are upper-cased, so `x` and `p` are accepted.
    #[instrument]
    pub fn human(input: &str) -> Result<Marker, MarkerError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(MarkerError::Unsupported(trimmed.to_string())),
        };
        if symbol == Self::COMPUTER.0 {
            Err(MarkerError::Reserved)
        } else if Self::HUMAN_CHOICES.contains(&symbol) {
            Ok(Marker(symbol))
        } else {
            Err(MarkerError::Unsupported(trimmed.to_string()))
        }
    }

    /// The marker's character.
    pub fn symbol(self) -> char {
        self.0
    }
}

/// Rejected marker choice.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// The robot already plays this marker.
    #[display("O is the computer's marker")]
    Reserved,
    /// Not one of the offered symbols.
    #[display("'{}' is not one of X, *, P or +", _0)]
    Unsupported(String),
}

impl std::error::Error for MarkerError {}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Square carrying a marker.
    Marked(Marker),
}

impl Square {
    /// The marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Puts `marker` on `pos`, overwriting whatever was there.
    ///
    /// Game code goes through [`crate::TicTacToeGame::place`], which refuses
    /// marked squares.
    pub fn place(&mut self, pos: Position, marker: Marker) {
        self.squares[pos.index()] = Square::Marked(marker);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Empty positions in board order.
    pub fn unmarked(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Whether every square is marked.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Whether the center square is still open.
    pub fn center_open(&self) -> bool {
        self.is_empty(Position::Center)
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
