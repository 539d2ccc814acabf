//! Computer opponents.

use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A computer opponent.
///
/// Every game draws one robot at random when a session starts and keeps it
/// across replays. Games attach their own behaviour to the robot; in
/// rock-paper-scissors-spock-lizard each robot has a weighted move table,
/// in tic-tac-toe the robot only lends its name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
    strum::EnumIter,
)]
pub enum Robot {
    /// Eva.
    #[display("Eva")]
    Eva,
    /// R2D2.
    #[display("R2D2")]
    R2d2,
    /// C3PO.
    #[display("C3PO")]
    C3po,
    /// Wall-E.
    #[display("Wall-E")]
    WallE,
}

impl Robot {
    /// Picks a robot uniformly at random.
    #[instrument(skip(rng))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // The roster is never empty.
        Self::iter().choose(rng).unwrap_or(Robot::Eva)
    }
}
