//! Robot move tables.

use super::Choice;
use parlor_core::Robot;
use rand::Rng;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use tracing::{debug, instrument};

/// A discrete distribution over choices, written as `(choice, weight)` pairs.
///
/// A choice with weight 3 is three times as likely as one with weight 1.
/// Draws go through [`WeightedChoices::sampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedChoices {
    entries: &'static [(Choice, u32)],
}

const EVA: WeightedChoices = WeightedChoices {
    entries: &[(Choice::Rock, 2), (Choice::Spock, 2), (Choice::Scissor, 2)],
};

const R2D2: WeightedChoices = WeightedChoices {
    entries: &[
        (Choice::Rock, 1),
        (Choice::Spock, 3),
        (Choice::Scissor, 2),
        (Choice::Paper, 1),
        (Choice::Lizard, 1),
    ],
};

const C3PO: WeightedChoices = WeightedChoices {
    entries: &[(Choice::Rock, 1), (Choice::Paper, 1), (Choice::Scissor, 1)],
};

const WALL_E: WeightedChoices = WeightedChoices {
    entries: &[(Choice::Paper, 3), (Choice::Lizard, 1)],
};

impl WeightedChoices {
    /// The `(choice, weight)` pairs in table order.
    pub fn entries(&self) -> &'static [(Choice, u32)] {
        self.entries
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    /// Weight of `choice`, zero when the table never plays it.
    pub fn weight(&self, choice: Choice) -> u32 {
        self.entries
            .iter()
            .filter(|(entry, _)| *entry == choice)
            .map(|(_, weight)| weight)
            .sum()
    }

    /// Probability that a draw yields `choice`.
    pub fn probability(&self, choice: Choice) -> f64 {
        f64::from(self.weight(choice)) / f64::from(self.total_weight())
    }

    /// Builds a sampler over this table.
    ///
    /// # Errors
    ///
    /// Returns [`WeightedError`] when the table is empty or every weight is
    /// zero.
    pub fn sampler(&self) -> Result<ChoiceSampler, WeightedError> {
        let index = WeightedIndex::new(self.entries.iter().map(|&(_, weight)| weight))?;
        Ok(ChoiceSampler {
            entries: self.entries,
            index,
        })
    }
}

/// A move table ready to draw from.
#[derive(Debug, Clone)]
pub struct ChoiceSampler {
    entries: &'static [(Choice, u32)],
    index: WeightedIndex<u32>,
}

impl Distribution<Choice> for ChoiceSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        self.entries[self.index.sample(rng)].0
    }
}

/// A robot's playing style in rock-paper-scissors-spock-lizard.
///
/// Robots have no memory: every round is an independent draw from the
/// same table.
pub trait Personality {
    /// The robot's move table.
    fn weighted_choices(self) -> WeightedChoices;

    /// Draws the robot's next move.
    ///
    /// # Errors
    ///
    /// Returns [`WeightedError`] when the move table cannot be sampled.
    fn choose_move<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Choice, WeightedError>;
}

impl Personality for Robot {
    fn weighted_choices(self) -> WeightedChoices {
        match self {
            Robot::Eva => EVA,
            Robot::R2d2 => R2D2,
            Robot::C3po => C3PO,
            Robot::WallE => WALL_E,
        }
    }

    #[instrument(skip(rng))]
    fn choose_move<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Choice, WeightedError> {
        let choice = self.weighted_choices().sampler()?.sample(rng);
        debug!(robot = %self, %choice, "Robot chose");
        Ok(choice)
    }
}
