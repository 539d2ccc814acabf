//! Interactive tic-tac-toe session.

use super::text::{self, DIVIDER, FIRST_PLAYER_MENU, READY_FOR_GAME, READY_FOR_NEXT_ROUND};
use super::{Console, TicTacToeSettings};
use anyhow::{Result, anyhow};
use parlor_core::{Robot, Side};
use parlor_tictactoe::{FirstMover, Marker, Placement, Position, RoundResult, TicTacToeGame};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Plays games until the human declines another one.
///
/// Returns the final game state.
#[instrument(skip_all, fields(target = *settings.target_score()))]
pub fn run<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    settings: &TicTacToeSettings,
) -> Result<TicTacToeGame>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.clear()?;
    let name = console.ask_text("What's your name?")?;
    let marker = console.prompt_until(
        "Please pick a marker you want to use for this game (X, *, P, +)",
        Marker::human,
    )?;
    let robot = Robot::random(rng);
    info!(%robot, %marker, "Opponent selected");

    let opener = pick_first_player(console, rng, &name, robot)?;
    let target = *settings.target_score();

    console.clear()?;
    let rules = text::tictactoe_rules(&name, robot, marker.symbol(), target);
    console.say(rules)?;
    console.pause(READY_FOR_GAME)?;
    console.clear()?;

    let mut game = TicTacToeGame::new(marker, target).start(opener)?;

    loop {
        while game.phase().is_playing() {
            game = play_round(console, rng, game, &name, robot)?;
        }

        match game.grand_winner() {
            Some(Side::Player) => console.say(format!("{} won the game!!!", name))?,
            _ => console.say("I hate to tell you this; you lost the game!")?,
        }

        game = game.offer_replay()?;
        if !console.ask_yes_no("Would you like to play again? (y/n)")? {
            game = game.decline()?;
            break;
        }

        console.clear()?;
        console.say("Let's play again!")?;
        console.blank()?;
        let opener = pick_first_player(console, rng, &name, robot)?;
        console.clear()?;
        game = game.replay(opener)?;
    }

    console.say("Thanks for playing Tic Tac Toe! Goodbye!")?;
    Ok(game)
}

fn pick_first_player<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    name: &str,
    robot: Robot,
) -> Result<Side>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let choice: FirstMover = console.prompt_until(FIRST_PLAYER_MENU, str::parse)?;
    let opener = choice.resolve(rng);
    console.clear()?;
    match opener {
        Side::Player => console.say(format!("{} will go first!!", name))?,
        Side::Computer => console.say(format!("{} will go first!!", robot))?,
    }
    console.blank()?;
    console.pause(READY_FOR_GAME)?;
    Ok(opener)
}

fn show_board<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &TicTacToeGame,
    name: &str,
    robot: Robot,
) -> Result<()> {
    let scoreboard = text::scoreboard(*game.round(), name, robot, game.score());
    console.say(scoreboard)?;
    let computer = Marker::COMPUTER;
    console.say(format!("{name}'s marker is: {}", game.human()))?;
    console.say(format!("{robot}'s marker is a {computer}."))?;
    console.blank()?;
    console.say(text::board(game.board()))?;
    console.blank()?;
    Ok(())
}

/// Plays moves until the round ends, then moves past it.
fn play_round<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    mut game: TicTacToeGame,
    name: &str,
    robot: Robot,
) -> Result<TicTacToeGame>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    show_board(console, &game, name, robot)?;

    let report = loop {
        let square = match game.to_move() {
            Side::Player => {
                let board = game.board().clone();
                let question = format!("Choose a square ({}): ", text::open_squares(&board));
                console.prompt_until(&question, |answer| {
                    answer
                        .parse::<Position>()
                        .ok()
                        .filter(|pos| board.is_empty(*pos))
                        .ok_or("that's not a valid choice.")
                })?
            }
            Side::Computer => game
                .computer_move(rng)
                .ok_or_else(|| anyhow!("Robot has no open square"))?,
        };
        debug!(side = %game.to_move(), position = %square, "Move");

        let (next, placement) = game.place(square)?;
        game = next;
        match placement {
            Placement::Continue { next } => {
                if next == Side::Player {
                    console.clear()?;
                    show_board(console, &game, name, robot)?;
                }
            }
            Placement::RoundOver(report) => break report,
        }
    };

    console.clear()?;
    show_board(console, &game, name, robot)?;
    match report.result {
        RoundResult::Won(Side::Player) => console.say(format!("{} won! Yay!", name))?,
        RoundResult::Won(Side::Computer) => console.say(format!("{} won this round.", robot))?,
        RoundResult::Tie => console.say("It's a tie!")?,
    }
    console.say(DIVIDER)?;
    console.pause(READY_FOR_NEXT_ROUND)?;
    console.clear()?;
    Ok(game.next_round()?)
}
