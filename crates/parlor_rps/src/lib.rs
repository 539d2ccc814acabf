//! Rock-paper-scissors-spock-lizard game logic.
//!
//! Pure functions and values only: nothing here reads from or writes to the
//! terminal. Callers hand in already validated [`Choice`]s and render the
//! [`RoundReport`]s that come back.
//!
//! # Example
//!
//! ```
//! use parlor_rps::{Choice, RoundOutcome, resolve};
//!
//! let spock: Choice = "sp".parse().unwrap();
//! assert_eq!(resolve(spock, Choice::Rock), RoundOutcome::PlayerWins);
//! assert_eq!(resolve(Choice::Lizard, Choice::Lizard), RoundOutcome::Tie);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod choice;
mod dominance;
mod game;
mod history;
mod personality;

pub use choice::{Choice, ParseChoiceError};
pub use dominance::{RoundOutcome, resolve, verb};
pub use game::{DEFAULT_TARGET, RoundReport, RpsGame};
pub use history::MoveHistory;
pub use personality::{ChoiceSampler, Personality, WeightedChoices};
