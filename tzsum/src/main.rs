//! `tzsum`: compute, combine and check Tillich-Zémor homomorphic hashes.
//!
//! Hashes are printed as lowercase hex, one `<hash>  <input>` line per input, like the
//! coreutils `*sum` tools.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Command, LOG_ENV};
use error::Result;
use std::{path::PathBuf, process::ExitCode};
use tracing::{debug, error, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Hash { files, chunk_size } => {
            let files = if files.is_empty() {
                vec![PathBuf::from(commands::STDIN)]
            } else {
                files
            };

            let mut failed = false;
            for path in &files {
                match commands::hash_path(path, chunk_size) {
                    Ok(hash) => println!("{}  {}", hex::encode(hash), path.display()),
                    Err(err) => {
                        error!("{err}");
                        failed = true;
                    }
                }
            }

            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Concat { hashes } => {
            println!("{}", hex::encode(commands::concat(&hashes)?));
        }
        Command::Validate { combined, hashes } => {
            if commands::validate(&combined, &hashes)? {
                println!("OK");
            } else {
                println!("FAILED");
                warn!(pieces = hashes.len(), "combined hash does not match");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Subtract {
            side,
            combined,
            part,
        } => {
            debug!(?side, "subtracting piece");
            println!("{}", hex::encode(commands::subtract(side, &combined, &part)?));
        }
    }

    Ok(ExitCode::SUCCESS)
}
