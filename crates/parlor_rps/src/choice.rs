//! The five legal moves and how players type them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A move in rock-paper-scissors-spock-lizard.
///
/// `Display` prints [`Choice::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Rock (r).
    Rock,
    /// Paper (p).
    Paper,
    /// Scissor (sc).
    Scissor,
    /// Spock (sp).
    Spock,
    /// Lizard (l).
    Lizard,
}

impl Choice {
    /// Canonical full name.
    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissor => "scissor",
            Choice::Spock => "spock",
            Choice::Lizard => "lizard",
        }
    }

    /// Short form accepted at the prompt.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Choice::Rock => "r",
            Choice::Paper => "p",
            Choice::Scissor => "sc",
            Choice::Spock => "sp",
            Choice::Lizard => "l",
        }
    }

    /// Expands one of the five abbreviations.
    #[instrument]
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        match abbreviation {
            "r" => Some(Choice::Rock),
            "p" => Some(Choice::Paper),
            "sc" => Some(Choice::Scissor),
            "sp" => Some(Choice::Spock),
            "l" => Some(Choice::Lizard),
            _ => None,
        }
    }

    /// Matches a canonical full name.
    #[instrument]
    pub fn from_name(name: &str) -> Option<Self> {
        Choice::iter().find(|choice| choice.name() == name)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input that is neither an abbreviation nor a full name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "'{}' is not one of rock(r), paper(p), scissor(sc), spock(sp), lizard(l)",
    input
)]
pub struct ParseChoiceError {
    /// Text as typed.
    pub input: String,
}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Accepts an abbreviation or a full name, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Choice::from_abbreviation(&normalized)
            .or_else(|| Choice::from_name(&normalized))
            .ok_or_else(|| ParseChoiceError {
                input: s.to_string(),
            })
    }
}
