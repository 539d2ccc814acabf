//! Fixed game text and rendering of core values.

use parlor_core::{Robot, Score};
use parlor_rps::Choice;
use parlor_tictactoe::{Board, Position, Square};

pub(crate) const DIVIDER: &str = "----------------------------------------------------";

pub(crate) const READY_FOR_GAME: &str =
    "When you are ready to start the game, press the enter button";

pub(crate) const READY_FOR_NEXT_ROUND: &str =
    "When you are ready for the next round hit the enter key";

pub(crate) fn scoreboard(round: u32, name: &str, robot: Robot, score: &Score) -> String {
    format!(
        "Round {} Scoreboard: {} => {} {} => {}",
        round,
        name,
        score.player(),
        robot,
        score.computer()
    )
}

pub(crate) fn rps_welcome(name: &str, target: u32) -> String {
    format!(
        "Hi {name}! Welcome to Rock, Paper, Scissor, Spock, Lizard!\n\
         \n\
         You will be playing against a randomly selected robot! Each round\n\
         you will need to pick a move from the list below. The round winner\n\
         will get one point. Whoever gets to {target} points first, wins the game\n\
         and claims VICTORY!! May the odds be ever in your favor!!\n"
    )
}

pub(crate) const RPS_RULES: &str = "\
*-----------------------------------------------*
Rock(r) - Crushes Lizard - Crushes Scissor
Paper(p) - Disproves Spock - Covers Rock
Scissor(sc) - Decapitates Lizard - Cuts Paper
Spock(sp) - Vaporizes Rock - Smashes Scissor
Lizard(l) - Eats Paper - Poisons Spock
*-----------------------------------------------*";

pub(crate) const RPS_PROMPT: &str =
    "Please choose rock(r), paper(p), scissor(sc), spock(sp), lizard(l):";

pub(crate) fn history_line(choices: &[Choice]) -> String {
    choices
        .iter()
        .map(|choice| choice.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalises the first letter of `word`.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn tictactoe_rules(name: &str, robot: Robot, marker: char, target: u32) -> String {
    format!(
        "Welcome to Tic Tac Toe {name}! You are playing against\n\
         {robot}! Here are the rules and how to play!\n\
         \n\
         => This game is played on a grid that is 3 squares by 3 squares.\n\
         \n\
         => Each round you will place your marker in one of the empty\n\
         \x20  squares by typing in the number of the square and hitting\n\
         \x20  enter. For example, if square 1 is empty you would type 1\n\
         \x20  and hit enter. That would place your {marker} marker into square 1.\n\
         \n\
         => Your objective is to get three of your marks in a row\n\
         \x20  across, down, up, or diagonally.\n\
         \n\
         => The first to get 3 markers in a row wins the round and scores\n\
         \x20  1 point.\n\
         \n\
         => The first to get to {target} points wins the game.\n\
         \n\
         \"GOOD LUCK AND MAY THE ODDS BE EVER IN YOUR FAVOR\"\n"
    )
}

pub(crate) const FIRST_PLAYER_MENU: &str = "\
----------- PICK FIRST PLAYER ----------

Enter 1 to go first.
Enter 2 for the computer to go first.
Enter 3 to be randomly generated.";

/// Draws the board with empty squares left blank.
pub(crate) fn board(board: &Board) -> String {
    let cell = |pos: Position| match board.get(pos) {
        Square::Empty => ' ',
        Square::Marked(marker) => marker.symbol(),
    };
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            format!(
                "     |     |\n  {}  |  {}  |  {}\n     |     |",
                cell(row[0]),
                cell(row[1]),
                cell(row[2])
            )
        })
        .collect();
    rows.join("\n-----+-----+-----\n")
}

pub(crate) fn open_squares(board: &Board) -> String {
    board
        .unmarked()
        .iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_tictactoe::Marker;

    #[test]
    fn test_board_drawing() {
        let mut b = Board::new();
        b.place(Position::TopLeft, Marker::COMPUTER);
        b.place(Position::BottomRight, Marker::human("x").unwrap());
        let drawn = board(&b);
        let lines: Vec<&str> = drawn.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "  O  |     |   ");
        assert_eq!(lines[9], "     |     |  X");
        assert_eq!(lines[3], "-----+-----+-----");
    }

    #[test]
    fn test_open_squares() {
        let mut b = Board::new();
        b.place(Position::Center, Marker::COMPUTER);
        assert_eq!(open_squares(&b), "1, 2, 3, 4, 6, 7, 8, 9");
    }

    #[test]
    fn test_history_line() {
        assert_eq!(history_line(&[Choice::Rock, Choice::Spock]), "rock, spock");
        assert_eq!(history_line(&[]), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("spock"), "Spock");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_scoreboard() {
        let score = Score::with_points(2, 1, 10);
        assert_eq!(
            scoreboard(3, "Ada", Robot::WallE, &score),
            "Round 3 Scoreboard: Ada => 2 Wall-E => 1"
        );
    }
}
