//! Session phases shared by every game controller.
//!
//! ```text
//! AwaitingSetup -> PlayingRound -> RoundResolved -> PlayingRound
//!                                                -> GameResolved -> AwaitingReplay -> PlayingRound
//!                                                                                  -> Terminal
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Names, markers and opponents are being chosen.
    #[display("awaiting setup")]
    AwaitingSetup,
    /// A round is underway.
    #[display("playing a round")]
    PlayingRound,
    /// The round has a result that has not been acted on yet.
    #[display("round resolved")]
    RoundResolved,
    /// A side reached the target score.
    #[display("game resolved")]
    GameResolved,
    /// Waiting for the human to accept or decline another game.
    #[display("awaiting replay decision")]
    AwaitingReplay,
    /// The session is over.
    #[display("terminal")]
    Terminal,
}

/// A transition was requested from a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot {} while {}", action, from)]
pub struct PhaseError {
    /// Phase the session was in.
    pub from: Phase,
    /// Transition that was attempted.
    pub action: &'static str,
}

impl Phase {
    fn expect(self, wanted: Phase, action: &'static str) -> Result<(), PhaseError> {
        if self == wanted {
            Ok(())
        } else {
            Err(PhaseError { from: self, action })
        }
    }

    /// Setup finished; the first round begins.
    #[instrument]
    pub fn start(self) -> Result<Phase, PhaseError> {
        self.expect(Phase::AwaitingSetup, "start a game")?;
        Ok(Phase::PlayingRound)
    }

    /// The current round has an outcome.
    #[instrument]
    pub fn resolve_round(self) -> Result<Phase, PhaseError> {
        self.expect(Phase::PlayingRound, "resolve a round")?;
        Ok(Phase::RoundResolved)
    }

    /// Moves past a resolved round, either into the next round or to the
    /// end of the game when someone reached the target.
    #[instrument]
    pub fn advance(self, grand_winner: bool) -> Result<Phase, PhaseError> {
        self.expect(Phase::RoundResolved, "advance past a round")?;
        let next = if grand_winner {
            Phase::GameResolved
        } else {
            Phase::PlayingRound
        };
        debug!(%next, "Round advanced");
        Ok(next)
    }

    /// The grand winner has been announced; ask about another game.
    #[instrument]
    pub fn offer_replay(self) -> Result<Phase, PhaseError> {
        self.expect(Phase::GameResolved, "offer a replay")?;
        Ok(Phase::AwaitingReplay)
    }

    /// Applies the human's replay decision.
    #[instrument]
    pub fn replay(self, accepted: bool) -> Result<Phase, PhaseError> {
        self.expect(Phase::AwaitingReplay, "decide on a replay")?;
        Ok(if accepted {
            Phase::PlayingRound
        } else {
            Phase::Terminal
        })
    }

    /// Whether rounds can be played.
    pub fn is_playing(self) -> bool {
        self == Phase::PlayingRound
    }
}
