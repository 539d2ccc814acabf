//! Parlor - terminal games against scripted robots.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use parlor::{Cli, Command, Console, ParlorConfig, rps_session, tictactoe_session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game text owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = configure(&cli)?;
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), config.console());

    match cli.command {
        Command::Rps { .. } => {
            let game = rps_session::run(&mut console, &mut rng, config.rps())?;
            info!(score = ?game.score(), "Session over");
        }
        Command::TicTacToe { .. } => {
            let game = tictactoe_session::run(&mut console, &mut rng, config.tictactoe())?;
            info!(score = ?game.score(), "Session over");
        }
    }

    Ok(())
}

/// Loads the config file and applies command-line overrides.
#[instrument(skip(cli), fields(path = %cli.config.display()))]
fn configure(cli: &Cli) -> Result<ParlorConfig> {
    let mut config = ParlorConfig::load(&cli.config)?;

    match cli.command {
        Command::Rps { target } => {
            if let Some(target) = target {
                config = config.with_rps_target(target);
            }
        }
        Command::TicTacToe { target } => {
            if let Some(target) = target {
                config = config.with_tictactoe_target(target);
            }
        }
    }
    if cli.no_clear {
        config = config.without_clearing();
    }

    config.validate()?;
    info!(?config, seed = ?cli.seed, "Configuration ready");
    Ok(config)
}
