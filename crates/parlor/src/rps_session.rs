//! Interactive rock-paper-scissors-spock-lizard session.

use super::text::{self, DIVIDER, READY_FOR_GAME, READY_FOR_NEXT_ROUND, RPS_PROMPT, RPS_RULES};
use super::{Console, RpsSettings};
use anyhow::Result;
use parlor_core::{Robot, Side};
use parlor_rps::{Choice, Personality, RoundOutcome, RoundReport, RpsGame, verb};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

const GOODBYE: &str = "Thanks for playing Rock, Paper, Scissor, Spock, Lizard. Good bye!";

/// Plays games until the human declines another one.
///
/// Returns the final game state, which still holds the last score and
/// move history.
#[instrument(skip_all, fields(target = *settings.target_score()))]
pub fn run<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    settings: &RpsSettings,
) -> Result<RpsGame>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.clear()?;
    let name = console.ask_text("What's your name?")?;
    let robot = Robot::random(rng);
    info!(%robot, "Opponent selected");

    let target = *settings.target_score();
    let mut game = RpsGame::new(target).start()?;

    console.clear()?;
    console.say(text::rps_welcome(&name, target))?;
    console.say(RPS_RULES)?;
    console.pause(READY_FOR_GAME)?;
    console.clear()?;

    loop {
        while game.phase().is_playing() {
            let scoreboard = text::scoreboard(*game.round(), &name, robot, game.score());
            console.say(scoreboard)?;
            let player: Choice = console.prompt_until(RPS_PROMPT, str::parse)?;
            let computer = robot.choose_move(rng)?;

            let (next, report) = game.play_round(player, computer)?;
            show_round(console, &name, robot, &report)?;
            console.say(DIVIDER)?;
            console.pause(READY_FOR_NEXT_ROUND)?;
            console.clear()?;
            game = next.next_round()?;
        }

        match game.grand_winner() {
            Some(Side::Player) => console.say(format!("{} won the game!!!", name))?,
            _ => console.say("I hate to tell you this; you lost the game!")?,
        }

        if console.ask_yes_no("Do you want to see your move history?")? {
            console.say(text::history_line(game.history().player()))?;
        }
        let question = "Do you want to see the computer's history?";
        if console.ask_yes_no(question)? {
            console.say(text::history_line(game.history().computer()))?;
        }

        game = game.offer_replay()?;
        let again = console.ask_yes_no("Would you like to play again? (y/n)")?;
        game = game.replay(again)?;
        if !again {
            break;
        }
        console.clear()?;
    }

    console.say(GOODBYE)?;
    Ok(game)
}

fn show_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
    robot: Robot,
    report: &RoundReport,
) -> Result<()> {
    console.say(format!("{} chose {}", name, report.player))?;
    console.say(format!("{} chose {}", robot, report.computer))?;

    let (winner, loser) = match report.outcome {
        RoundOutcome::PlayerWins => (report.player, report.computer),
        RoundOutcome::ComputerWins => (report.computer, report.player),
        RoundOutcome::Tie => {
            console.say("*** It's a tie! ***")?;
            return Ok(());
        }
    };
    if let Some(verb) = verb(winner, loser) {
        let winner = text::capitalize(winner.name());
        console.say(format!("{winner} {verb} {loser}!"))?;
    }
    match report.outcome {
        RoundOutcome::PlayerWins => console.say(format!("*** {name} won this round! ***"))?,
        _ => console.say(format!("*** {robot} won this round! ***"))?,
    }
    Ok(())
}
