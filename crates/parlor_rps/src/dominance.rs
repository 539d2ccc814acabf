//! Who beats whom.
//!
//! Every choice beats exactly two others and loses to the remaining two,
//! so two different choices never tie.

use super::Choice;
use parlor_core::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

impl Choice {
    /// The two choices this one defeats.
    pub fn beats(self) -> [Choice; 2] {
        match self {
            Choice::Rock => [Choice::Scissor, Choice::Lizard],
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Scissor => [Choice::Lizard, Choice::Paper],
            Choice::Spock => [Choice::Rock, Choice::Scissor],
            Choice::Lizard => [Choice::Spock, Choice::Paper],
        }
    }

    /// Whether this choice defeats `other`.
    pub fn defeats(self, other: Choice) -> bool {
        self.beats().contains(&other)
    }
}

/// How `winner` defeats `loser`, or `None` when it does not.
///
/// ```
/// use parlor_rps::{Choice, verb};
///
/// assert_eq!(verb(Choice::Lizard, Choice::Spock), Some("poisons"));
/// assert_eq!(verb(Choice::Spock, Choice::Lizard), None);
/// ```
pub fn verb(winner: Choice, loser: Choice) -> Option<&'static str> {
    use Choice::*;

    match (winner, loser) {
        (Rock, Lizard) | (Rock, Scissor) => Some("crushes"),
        (Paper, Spock) => Some("disproves"),
        (Paper, Rock) => Some("covers"),
        (Scissor, Lizard) => Some("decapitates"),
        (Scissor, Paper) => Some("cuts"),
        (Spock, Rock) => Some("vaporizes"),
        (Spock, Scissor) => Some("smashes"),
        (Lizard, Paper) => Some("eats"),
        (Lizard, Spock) => Some("poisons"),
        _ => None,
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The human's choice won.
    PlayerWins,
    /// The robot's choice won.
    ComputerWins,
    /// Both picked the same thing.
    Tie,
}

impl RoundOutcome {
    /// The side that takes the point, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::PlayerWins => Some(Side::Player),
            RoundOutcome::ComputerWins => Some(Side::Computer),
            RoundOutcome::Tie => None,
        }
    }
}

/// Decides a round between the human's and the robot's choice.
///
/// The relation is checked in both directions; a tie is left when neither
/// side dominates.
#[instrument]
pub fn resolve(player: Choice, computer: Choice) -> RoundOutcome {
    let outcome = if player.defeats(computer) {
        RoundOutcome::PlayerWins
    } else if computer.defeats(player) {
        RoundOutcome::ComputerWins
    } else {
        RoundOutcome::Tie
    };
    debug!(?outcome, "Round resolved");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_same_choice_ties() {
        for choice in Choice::iter() {
            assert_eq!(resolve(choice, choice), RoundOutcome::Tie);
        }
    }

    #[test]
    fn test_distinct_pairs_are_antisymmetric() {
        for a in Choice::iter() {
            for b in Choice::iter().filter(|b| *b != a) {
                let forward = resolve(a, b);
                let backward = resolve(b, a);
                assert_ne!(forward, RoundOutcome::Tie, "{a} vs {b}");
                match forward {
                    RoundOutcome::PlayerWins => assert_eq!(backward, RoundOutcome::ComputerWins),
                    RoundOutcome::ComputerWins => assert_eq!(backward, RoundOutcome::PlayerWins),
                    RoundOutcome::Tie => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn test_each_choice_beats_two_and_loses_to_two() {
        for choice in Choice::iter() {
            let wins = Choice::iter().filter(|o| choice.defeats(*o)).count();
            let losses = Choice::iter().filter(|o| o.defeats(choice)).count();
            assert_eq!((wins, losses), (2, 2), "{choice}");
        }
    }

    #[test]
    fn test_classic_matchups() {
        use Choice::*;
        use RoundOutcome::*;

        assert_eq!(resolve(Rock, Scissor), PlayerWins);
        assert_eq!(resolve(Rock, Paper), ComputerWins);
        assert_eq!(resolve(Paper, Spock), PlayerWins);
        assert_eq!(resolve(Lizard, Scissor), ComputerWins);
    }

    #[test]
    fn test_verbs_cover_exactly_the_edges() {
        for winner in Choice::iter() {
            for loser in Choice::iter() {
                assert_eq!(
                    verb(winner, loser).is_some(),
                    winner.defeats(loser),
                    "{winner} vs {loser}"
                );
            }
        }
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(RoundOutcome::PlayerWins.winner(), Some(Side::Player));
        assert_eq!(RoundOutcome::ComputerWins.winner(), Some(Side::Computer));
        assert_eq!(RoundOutcome::Tie.winner(), None);
    }
}
