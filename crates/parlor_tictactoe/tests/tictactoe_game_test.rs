//! Tests for tic-tac-toe rounds, scoring and replay.

use parlor_core::{Phase, Side};
use parlor_tictactoe::{
    FirstMover, Marker, PlaceError, Placement, Position, RoundResult, TicTacToeGame,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn x() -> Marker {
    Marker::human("X").unwrap()
}

fn pos(number: u8) -> Position {
    Position::from_number(number).unwrap()
}

fn started(opener: Side, target: u32) -> TicTacToeGame {
    TicTacToeGame::new(x(), target)
        .start(opener)
        .expect("setup to playing")
}

fn continues(next: Side) -> Placement {
    Placement::Continue { next }
}

/// Plays the given squares in order, alternating sides, and returns the
/// game with the last placement.
fn play(mut game: TicTacToeGame, squares: &[u8]) -> (TicTacToeGame, Placement) {
    let mut last = None;
    for &number in squares {
        let (next, placement) = game.place(pos(number)).expect("legal move");
        game = next;
        last = Some(placement);
    }
    (game, last.expect("at least one square"))
}

#[test]
fn test_sides_alternate() {
    let game = started(Side::Player, 3);
    let (game, placement) = game.place(pos(5)).unwrap();
    assert_eq!(placement, continues(Side::Computer));
    assert_eq!(game.board().get(Position::Center).marker(), Some(x()));

    let (game, placement) = game.place(pos(1)).unwrap();
    assert_eq!(placement, continues(Side::Player));
    let top_left = game.board().get(Position::TopLeft);
    assert_eq!(top_left.marker(), Some(Marker::COMPUTER));
}

#[test]
fn test_occupied_square_rejected() {
    let (game, _) = started(Side::Player, 3).place(pos(5)).unwrap();
    let err = game.place(pos(5)).unwrap_err();
    assert_eq!(err, PlaceError::SquareOccupied(Position::Center));
    assert_eq!(err.to_string(), "Square 5 is already marked");
}

#[test]
fn test_place_before_setup_rejected() {
    let game = TicTacToeGame::new(x(), 3);
    assert!(matches!(game.place(pos(1)), Err(PlaceError::Phase(_))));
}

#[test]
fn test_human_line_wins_round() {
    // X: 1, 2, 3   O: 4, 5
    let (game, placement) = play(started(Side::Player, 3), &[1, 4, 2, 5, 3]);
    let Placement::RoundOver(report) = placement else {
        panic!("round should be over");
    };
    assert_eq!(report.round, 1);
    assert_eq!(report.result, RoundResult::Won(Side::Player));
    assert_eq!(report.grand_winner, None);
    assert_eq!(game.score().player(), 1);
    assert_eq!(*game.phase(), Phase::RoundResolved);
    assert!(game.clone().place(pos(9)).is_err());
}

#[test]
fn test_full_board_is_tie() {
    // X O X / X O O / O X X, X opens.
    let (game, placement) = play(started(Side::Player, 3), &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    let Placement::RoundOver(report) = placement else {
        panic!("round should be over");
    };
    assert_eq!(report.result, RoundResult::Tie);
    assert_eq!(game.score().player(), 0);
    assert_eq!(game.score().computer(), 0);
}

#[test]
fn test_next_round_clears_board_and_restores_opener() {
    let (game, _) = play(started(Side::Computer, 3), &[1, 4, 2, 5, 3]);
    assert_eq!(game.score().computer(), 1);

    let game = game.next_round().unwrap();
    assert_eq!(*game.phase(), Phase::PlayingRound);
    assert_eq!(*game.to_move(), Side::Computer);
    assert_eq!(*game.round(), 2);
    assert_eq!(game.board().unmarked().len(), 9);
}

#[test]
fn test_third_win_ends_game() {
    let mut game = started(Side::Player, 3);
    for _ in 0..3 {
        let (next, _) = play(game, &[1, 4, 2, 5, 3]);
        game = next.next_round().unwrap();
    }
    assert_eq!(*game.phase(), Phase::GameResolved);
    assert_eq!(game.grand_winner(), Some(Side::Player));

    let game = game.offer_replay().unwrap().replay(Side::Computer).unwrap();
    assert_eq!(*game.phase(), Phase::PlayingRound);
    assert_eq!(game.score().player(), 0);
    assert_eq!(*game.round(), 1);
    assert_eq!(*game.to_move(), Side::Computer);
    assert_eq!(*game.human(), x());
}

#[test]
fn test_decline_ends_session() {
    let (game, _) = play(started(Side::Player, 1), &[1, 4, 2, 5, 3]);
    let game = game
        .next_round()
        .unwrap()
        .offer_replay()
        .unwrap()
        .decline()
        .unwrap();
    assert_eq!(*game.phase(), Phase::Terminal);
    assert_eq!(game.grand_winner(), Some(Side::Player));
}

#[test]
fn test_robot_takes_center_then_blocks() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let (game, _) = play(started(Side::Player, 3), &[4]);
    let robot = game.computer_move(&mut rng).unwrap();
    assert_eq!(robot, Position::Center);

    // Robot takes 5, human answers on 1 and threatens column 1-4-7.
    let (game, _) = play(game, &[5, 1]);
    assert_eq!(game.computer_move(&mut rng), Some(Position::BottomLeft));
}

#[test]
fn test_robot_versus_random_human_finishes_rounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut game = started(Side::Player, 3);
    let mut rounds = 0;
    while *game.phase() == Phase::PlayingRound {
        let square = match game.to_move() {
            Side::Computer => game.computer_move(&mut rng).unwrap(),
            Side::Player => {
                let open = game.board().unmarked();
                open[rounds % open.len()]
            }
        };
        let (next, placement) = game.place(square).unwrap();
        game = next;
        if let Placement::RoundOver(_) = placement {
            game = game.next_round().unwrap();
            rounds += 1;
        }
        assert!(rounds < 200, "game never ended");
    }
    assert_eq!(*game.phase(), Phase::GameResolved);
    assert!(game.grand_winner().is_some());
}

#[test]
fn test_first_mover_menu() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let player = "1".parse::<FirstMover>().unwrap();
    assert_eq!(player.resolve(&mut rng), Side::Player);
    let computer = "2".parse::<FirstMover>().unwrap();
    assert_eq!(computer.resolve(&mut rng), Side::Computer);
    assert_eq!(" 3 ".parse::<FirstMover>(), Ok(FirstMover::Random));
    assert!("4".parse::<FirstMover>().is_err());

    let sides: std::collections::HashSet<Side> =
        (0..50).map(|_| FirstMover::Random.resolve(&mut rng)).collect();
    assert_eq!(sides.len(), 2);
}
