//! Parlor core - pieces shared by every parlor game.
//!
//! Both games are a human against a computer robot, scored round by round
//! until one side reaches a target. This crate holds the parts of that shape
//! that do not depend on the game being played.
//!
//! - **Side**: which seat a point or a move belongs to
//! - **Score**: immutable tally with grand winner detection
//! - **Robot**: the roster of computer opponents
//! - **Phase**: the session state machine every controller walks through
//!
//! # Example
//!
//! ```
//! use parlor_core::{Score, Side};
//!
//! let score = Score::new(2).award(Side::Player).award(Side::Player);
//! assert_eq!(score.grand_winner(), Some(Side::Player));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod phase;
mod robot;
mod score;
mod side;

pub use phase::{Phase, PhaseError};
pub use robot::Robot;
pub use score::Score;
pub use side::Side;
