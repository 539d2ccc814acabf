//! Round and game state for tic-tac-toe.

use super::rules::winning_marker;
use super::strategy;
use super::{Board, Marker, Position};
use derive_getters::Getters;
use parlor_core::{Phase, PhaseError, Score, Side};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Points needed to win a game unless configured otherwise.
pub const DEFAULT_TARGET: u32 = 3;

/// Who opens each round of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstMover {
    /// The human opens (menu option 1).
    Human,
    /// The robot opens (menu option 2).
    Computer,
    /// A coin flip decides (menu option 3).
    Random,
}

impl FirstMover {
    /// Settles the choice into a side.
    #[instrument(skip(rng))]
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Side {
        match self {
            FirstMover::Human => Side::Player,
            FirstMover::Computer => Side::Computer,
            FirstMover::Random => {
                if rng.gen_bool(0.5) {
                    Side::Player
                } else {
                    Side::Computer
                }
            }
        }
    }
}

/// Menu input other than 1, 2 or 3.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("'{}' is not 1, 2 or 3", _0)]
pub struct ParseFirstMoverError(pub String);

impl std::error::Error for ParseFirstMoverError {}

impl FromStr for FirstMover {
    type Err = ParseFirstMoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(FirstMover::Human),
            "2" => Ok(FirstMover::Computer),
            "3" => Ok(FirstMover::Random),
            other => Err(ParseFirstMoverError(other.to_string())),
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// A side completed a line.
    Won(Side),
    /// The board filled up without a line.
    Tie,
}

impl RoundResult {
    /// The side that takes the point, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundResult::Won(side) => Some(side),
            RoundResult::Tie => None,
        }
    }
}

/// What happened in a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number.
    pub round: u32,
    /// How it ended.
    pub result: RoundResult,
    /// Set when this round decided the game.
    pub grand_winner: Option<Side>,
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The round goes on with `next` to move.
    Continue {
        /// Side to move next.
        next: Side,
    },
    /// The placement ended the round.
    RoundOver(RoundReport),
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// Square is already occupied.
    #[display("Square {} is already marked", _0)]
    SquareOccupied(Position),
    /// No round is being played.
    #[display("{}", _0)]
    Phase(PhaseError),
}

impl std::error::Error for PlaceError {}

impl From<PhaseError> for PlaceError {
    fn from(err: PhaseError) -> Self {
        PlaceError::Phase(err)
    }
}

/// Everything that changes while a game is played.
///
/// Transitions consume the game and hand back the next value, so the
/// board and score only change through [`TicTacToeGame::place`],
/// [`TicTacToeGame::next_round`] and the replay methods.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TicTacToeGame {
    /// Current board.
    board: Board,
    /// The human's marker.
    human: Marker,
    /// Running score.
    score: Score,
    /// Number of the round being played (starts at 1).
    round: u32,
    /// Side that opens every round of this game.
    opener: Side,
    /// Side whose turn it is.
    to_move: Side,
    /// Where the session is.
    phase: Phase,
}

impl TicTacToeGame {
    /// Creates a game awaiting setup that ends at `target` points.
    #[instrument]
    pub fn new(human: Marker, target: u32) -> Self {
        Self {
            board: Board::new(),
            human,
            score: Score::new(target),
            round: 1,
            opener: Side::Player,
            to_move: Side::Player,
            phase: Phase::AwaitingSetup,
        }
    }

    /// Setup is done; `opener` makes the first move of every round.
    #[instrument(skip(self))]
    pub fn start(self, opener: Side) -> Result<Self, PhaseError> {
        Ok(Self {
            phase: self.phase.start()?,
            opener,
            to_move: opener,
            ..self
        })
    }

    /// Marker played by `side`.
    pub fn marker_for(&self, side: Side) -> Marker {
        match side {
            Side::Player => self.human,
            Side::Computer => Marker::COMPUTER,
        }
    }

    /// Side playing `marker`, if either does.
    pub fn side_of(&self, marker: Marker) -> Option<Side> {
        if marker == self.human {
            Some(Side::Player)
        } else if marker == Marker::COMPUTER {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Marks `pos` for the side to move.
    ///
    /// When the mark completes a line or fills the board, the point is
    /// awarded and the game waits in [`Phase::RoundResolved`].
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::SquareOccupied` if the position is already marked,
    /// and `PlaceError::Phase` when no round is in play.
    #[instrument(skip(self), fields(position = %pos, side = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<(Self, Placement), PlaceError> {
        let resolved = self.phase.resolve_round()?;
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        let marker = self.marker_for(self.to_move);
        self.board.place(pos, marker);
        debug!(%marker, "Square marked");

        let result = match winning_marker(&self.board).and_then(|m| self.side_of(m)) {
            Some(side) => RoundResult::Won(side),
            None if self.board.is_full() => RoundResult::Tie,
            None => {
                self.to_move = self.to_move.opponent();
                let next = self.to_move;
                return Ok((self, Placement::Continue { next }));
            }
        };

        self.phase = resolved;
        if let Some(side) = result.winner() {
            self.score = self.score.award(side);
        }
        let report = RoundReport {
            round: self.round,
            result,
            grand_winner: self.score.grand_winner(),
        };
        info!(
            ?result,
            player = self.score.player(),
            computer = self.score.computer(),
            "Round over"
        );
        self.round += 1;
        Ok((self, Placement::RoundOver(report)))
    }

    /// The robot's pick for the current board.
    pub fn computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        strategy::choose_move(&self.board, Marker::COMPUTER, self.human, rng)
    }

    /// Clears the board after a resolved round and hands the first move back
    /// to the opener, or moves to [`Phase::GameResolved`] when the game is won.
    #[instrument(skip(self))]
    pub fn next_round(mut self) -> Result<Self, PhaseError> {
        self.phase = self.phase.advance(self.score.is_grand_winner())?;
        self.board.clear();
        self.to_move = self.opener;
        Ok(self)
    }

    /// The game is over and the human is asked about another one.
    #[instrument(skip(self))]
    pub fn offer_replay(self) -> Result<Self, PhaseError> {
        Ok(Self {
            phase: self.phase.offer_replay()?,
            ..self
        })
    }

    /// Starts a fresh game with the same marker, opened by `opener`.
    #[instrument(skip(self))]
    pub fn replay(self, opener: Side) -> Result<Self, PhaseError> {
        let phase = self.phase.replay(true)?;
        info!("Starting a new game");
        Ok(Self {
            board: Board::new(),
            score: self.score.reset(),
            round: 1,
            opener,
            to_move: opener,
            phase,
            ..self
        })
    }

    /// Ends the session.
    #[instrument(skip(self))]
    pub fn decline(self) -> Result<Self, PhaseError> {
        Ok(Self {
            phase: self.phase.replay(false)?,
            ..self
        })
    }

    /// The side that won the game, if it is over.
    pub fn grand_winner(&self) -> Option<Side> {
        self.score.grand_winner()
    }
}
