//! Tests for rock-paper-scissors-spock-lizard game flow.

use parlor_core::{Phase, Robot, Score, Side};
use parlor_rps::{Choice, Personality, RoundOutcome, RpsGame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn started(target: u32) -> RpsGame {
    RpsGame::new(target).start().expect("setup to playing")
}

#[test]
fn test_round_awards_point_and_records_moves() {
    let game = started(10);
    let (game, report) = game.play_round(Choice::Spock, Choice::Rock).unwrap();

    assert_eq!(report.round, 1);
    assert_eq!(report.outcome, RoundOutcome::PlayerWins);
    assert_eq!(report.grand_winner, None);
    assert_eq!(game.score().player(), 1);
    assert_eq!(*game.round(), 2);
    assert_eq!(game.history().player(), [Choice::Spock]);
    assert_eq!(game.history().computer(), [Choice::Rock]);
    assert_eq!(*game.phase(), Phase::RoundResolved);
}

#[test]
fn test_tie_awards_nothing() {
    let game = started(10);
    let (game, report) = game.play_round(Choice::Paper, Choice::Paper).unwrap();
    assert_eq!(report.outcome, RoundOutcome::Tie);
    assert_eq!(*game.score(), Score::new(10));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_round_cannot_be_played_before_setup() {
    let result = RpsGame::new(10).play_round(Choice::Rock, Choice::Rock);
    assert!(result.is_err());
}

#[test]
fn test_second_round_requires_advancing() {
    let game = started(10);
    let (game, _) = game.play_round(Choice::Rock, Choice::Lizard).unwrap();
    let again = game.clone().play_round(Choice::Rock, Choice::Lizard);
    assert!(again.is_err());

    let game = game.next_round().unwrap();
    assert_eq!(*game.phase(), Phase::PlayingRound);
    assert!(game.play_round(Choice::Rock, Choice::Lizard).is_ok());
}

#[test]
fn test_player_reaching_ten_wins_the_game() {
    let mut game = started(10);
    for _ in 0..9 {
        let (next, _) = game.play_round(Choice::Rock, Choice::Scissor).unwrap();
        game = next.next_round().unwrap();
    }
    for _ in 0..9 {
        let (next, _) = game.play_round(Choice::Rock, Choice::Paper).unwrap();
        game = next.next_round().unwrap();
    }
    assert_eq!((game.score().player(), game.score().computer()), (9, 9));

    let (game, report) = game.play_round(Choice::Lizard, Choice::Spock).unwrap();
    assert_eq!(report.grand_winner, Some(Side::Player));
    assert_eq!(game.grand_winner(), Some(Side::Player));

    let game = game.next_round().unwrap();
    assert_eq!(*game.phase(), Phase::GameResolved);
}

#[test]
fn test_replay_clears_score_round_and_history() {
    let mut game = started(1);
    let (next, _) = game.play_round(Choice::Rock, Choice::Paper).unwrap();
    game = next.next_round().unwrap().offer_replay().unwrap();
    assert_eq!(*game.phase(), Phase::AwaitingReplay);

    let game = game.replay(true).unwrap();
    assert_eq!(*game.phase(), Phase::PlayingRound);
    assert_eq!(*game.score(), Score::new(1));
    assert_eq!(*game.round(), 1);
    assert!(game.history().is_empty());
}

#[test]
fn test_declining_replay_keeps_final_tally() {
    let (game, _) = started(1).play_round(Choice::Rock, Choice::Paper).unwrap();
    let game = game
        .next_round()
        .unwrap()
        .offer_replay()
        .unwrap()
        .replay(false)
        .unwrap();
    assert_eq!(*game.phase(), Phase::Terminal);
    assert_eq!(game.grand_winner(), Some(Side::Computer));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_robot_against_robot_reaches_a_grand_winner() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut game = started(10);
    let mut rounds = 0;
    while *game.phase() == Phase::PlayingRound {
        let player = Robot::R2d2.choose_move(&mut rng).unwrap();
        let computer = Robot::Eva.choose_move(&mut rng).unwrap();
        let (next, _) = game.play_round(player, computer).unwrap();
        game = next.next_round().unwrap();
        rounds += 1;
        assert!(rounds < 1000, "game never ended");
    }
    assert_eq!(*game.phase(), Phase::GameResolved);
    let winner = game.grand_winner().expect("a winner");
    assert_eq!(game.score().points(winner), 10);
}
