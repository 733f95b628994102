//! Ember command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Tag a message read from stdin
//! echo -n "Hi There" | ember tag --key 0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b
//!
//! # Check a tag (exit 0 on match, 1 on mismatch)
//! ember verify --key 4a656665 --tag <HEX> --message "what do ya want for nothing?"
//!
//! # Derive a public key, then a shared secret
//! ember public-key --scalar <HEX>
//! ember shared-secret --scalar <HEX> --point <HEX>
//! ```

use std::{io, process::ExitCode};

use clap::Parser;
use ember_cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&cli.command, stdin.lock(), &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => err.exit_code(),
    }
}
