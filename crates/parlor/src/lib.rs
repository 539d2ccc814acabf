//! Parlor - terminal games against scripted robots.
//!
//! The game rules live in `parlor_rps` and `parlor_tictactoe`; this crate is
//! the console around them.
//!
//! # Architecture
//!
//! - **Cli**: subcommand per game plus global flags
//! - **Config**: TOML file with target scores and console behaviour
//! - **Console**: line-based prompting with retry-until-valid loops
//! - **Sessions**: one controller per game, driving the core transitions
//!
//! # Example
//!
//! ```no_run
//! use parlor::{Console, ParlorConfig};
//! use rand::SeedableRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ParlorConfig::load("parlor.toml")?;
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout(), config.console());
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! parlor::rps_session::run(&mut console, &mut rng, config.rps())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
pub mod rps_session;
mod text;
pub mod tictactoe_session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleSettings, ParlorConfig, RpsSettings, TicTacToeSettings};
pub use console::{Console, ConsoleError};
