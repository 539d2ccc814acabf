//! Command-line interface for parlor.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor - rock-paper-scissors-spock-lizard and tic-tac-toe against robots
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Terminal games against scripted robots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,

    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, global = true, env = "PARLOR_CONFIG", default_value = "parlor.toml")]
    pub config: PathBuf,

    /// Seed for the robots' random choices, for repeatable games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Never clear the screen
    #[arg(long, global = true)]
    pub no_clear: bool,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rock, paper, scissor, spock, lizard
    Rps {
        /// Points needed to win, overriding the config file
        #[arg(long)]
        target: Option<u32>,
    },

    /// Tic-tac-toe
    #[command(name = "tictactoe", visible_alias = "ttt")]
    TicTacToe {
        /// Points needed to win, overriding the config file
        #[arg(long)]
        target: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rps_with_globals() {
        let args = ["parlor", "rps", "--seed", "9", "--target", "5"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.seed, Some(9));
        assert!(matches!(cli.command, Command::Rps { target: Some(5) }));
    }

    #[test]
    fn test_tictactoe_alias() {
        let args = ["parlor", "ttt", "--no-clear"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.no_clear);
        assert!(matches!(cli.command, Command::TicTacToe { target: None }));
    }

    #[test]
    fn test_requires_a_game() {
        assert!(Cli::try_parse_from(["parlor"]).is_err());
    }
}
