//! The two seats at the table.

use serde::{Deserialize, Serialize};

/// A participant in a parlor game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Side {
    /// The human at the keyboard.
    #[display("player")]
    Player,
    /// The robot opponent.
    #[display("computer")]
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}
