//! Round and game state for rock-paper-scissors-spock-lizard.

use super::{Choice, MoveHistory, RoundOutcome, resolve};
use derive_getters::Getters;
use parlor_core::{Phase, PhaseError, Score, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Points needed to win a game unless configured otherwise.
pub const DEFAULT_TARGET: u32 = 10;

/// Everything that changes while a game is played.
///
/// The controller owns one `RpsGame` and replaces it with the value each
/// transition returns; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RpsGame {
    /// Running score.
    score: Score,
    /// Number of the round about to be played (starts at 1).
    round: u32,
    /// Moves played so far this game.
    history: MoveHistory,
    /// Where the session is.
    phase: Phase,
}

/// What happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number.
    pub round: u32,
    /// The human's move.
    pub player: Choice,
    /// The robot's move.
    pub computer: Choice,
    /// Who took the round.
    pub outcome: RoundOutcome,
    /// Set when this round decided the game.
    pub grand_winner: Option<Side>,
}

impl RpsGame {
    /// Creates a game awaiting setup that ends at `target` points.
    #[instrument]
    pub fn new(target: u32) -> Self {
        Self {
            score: Score::new(target),
            round: 1,
            history: MoveHistory::new(),
            phase: Phase::AwaitingSetup,
        }
    }

    /// Setup is done; the first round may be played.
    #[instrument(skip(self))]
    pub fn start(self) -> Result<Self, PhaseError> {
        Ok(Self {
            phase: self.phase.start()?,
            ..self
        })
    }

    /// Plays one round with both moves already chosen.
    ///
    /// Records the moves, awards the point and leaves the game in
    /// [`Phase::RoundResolved`] until [`RpsGame::next_round`] is called.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_round(
        self,
        player: Choice,
        computer: Choice,
    ) -> Result<(Self, RoundReport), PhaseError> {
        let phase = self.phase.resolve_round()?;
        let outcome = resolve(player, computer);
        let score = match outcome.winner() {
            Some(side) => self.score.award(side),
            None => self.score,
        };
        let report = RoundReport {
            round: self.round,
            player,
            computer,
            outcome,
            grand_winner: score.grand_winner(),
        };
        info!(?outcome, player = score.player(), computer = score.computer(), "Round played");

        Ok((
            Self {
                score,
                round: self.round + 1,
                history: self.history.record(player, computer),
                phase,
            },
            report,
        ))
    }

    /// Moves on from a resolved round: to the next round, or to
    /// [`Phase::GameResolved`] when a side reached the target.
    #[instrument(skip(self))]
    pub fn next_round(self) -> Result<Self, PhaseError> {
        let phase = self.phase.advance(self.score.is_grand_winner())?;
        Ok(Self { phase, ..self })
    }

    /// The game is over and the human is asked about another one.
    #[instrument(skip(self))]
    pub fn offer_replay(self) -> Result<Self, PhaseError> {
        Ok(Self {
            phase: self.phase.offer_replay()?,
            ..self
        })
    }

    /// Applies the replay decision.
    ///
    /// Accepting clears score, round counter and history. Declining ends
    /// the session and keeps the final tally for display.
    #[instrument(skip(self))]
    pub fn replay(self, accepted: bool) -> Result<Self, PhaseError> {
        let phase = self.phase.replay(accepted)?;
        if accepted {
            info!("Starting a new game");
            Ok(Self {
                score: self.score.reset(),
                round: 1,
                history: MoveHistory::new(),
                phase,
            })
        } else {
            Ok(Self { phase, ..self })
        }
    }

    /// The side that won the game, if it is over.
    pub fn grand_winner(&self) -> Option<Side> {
        self.score.grand_winner()
    }
}

impl Default for RpsGame {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}
