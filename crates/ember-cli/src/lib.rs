//! Command layer for the `ember` binary.
//!
//! Argument parsing and command execution live here so they can be driven
//! from tests with in-memory input and output. The binary only installs
//! logging and maps [`Outcome`] to an exit code.
//!
//! All keys, tags, scalars and points are hex on the command line and on
//! stdout. Messages are raw bytes from `--message`, `--file` or stdin.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use ember_crypto::{Authenticator, CryptoError, Point};
use thiserror::Error;
use zeroize::Zeroizing;

/// Ember command-line tool
#[derive(Parser, Debug)]
#[command(name = "ember")]
#[command(about = "HMAC-SHA-256 tags and Curve25519 key agreement")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the tool.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the HMAC-SHA-256 tag of a message
    Tag {
        /// Secret key (hex, any non-empty length)
        #[arg(long)]
        key: String,

        /// Message source
        #[command(flatten)]
        input: MessageInput,
    },

    /// Check an HMAC-SHA-256 tag over a message
    Verify {
        /// Secret key (hex, any non-empty length)
        #[arg(long)]
        key: String,

        /// Tag to check (hex, 32 bytes)
        #[arg(long)]
        tag: String,

        /// Message source
        #[command(flatten)]
        input: MessageInput,
    },

    /// Derive the Curve25519 public key for a secret scalar
    PublicKey {
        /// Secret scalar (hex, 32 bytes)
        #[arg(long)]
        scalar: String,
    },

    /// Multiply a peer's public point by a secret scalar
    SharedSecret {
        /// Secret scalar (hex, 32 bytes)
        #[arg(long)]
        scalar: String,

        /// Peer public point (hex, 32 bytes)
        #[arg(long)]
        point: String,
    },
}

/// Where the message bytes come from. Stdin when neither flag is given.
#[derive(Args, Debug, Default)]
pub struct MessageInput {
    /// Message text
    #[arg(long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl MessageInput {
    fn read<R: Read>(&self, mut stdin: R) -> io::Result<Vec<u8>> {
        if let Some(text) = &self.message {
            return Ok(text.as_bytes().to_vec());
        }
        if let Some(path) = &self.file {
            return fs::read(path);
        }

        let mut message = Vec::new();
        stdin.read_to_end(&mut message)?;
        Ok(message)
    }
}

/// Errors surfaced by the tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument is not valid hex
    #[error("invalid hex in --{field}: {source}")]
    Hex {
        /// Argument that failed to decode
        field: &'static str,
        /// Decoder error
        source: hex::FromHexError,
    },

    /// Primitive rejected the input
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Reading the message or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed
    Success,
    /// `verify` ran but the tag did not match
    Mismatch,
}

impl Outcome {
    /// Process exit code: 0 on success, 1 on tag mismatch.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Mismatch => ExitCode::from(1),
        }
    }
}

/// Exit code for any [`CliError`].
pub const ERROR_EXIT_CODE: u8 = 2;

impl CliError {
    /// Report the failure as an `error` log event and return
    /// [`ERROR_EXIT_CODE`].
    ///
    /// The log event on stderr is the only place the failure is printed.
    pub fn exit_code(&self) -> ExitCode {
        tracing::error!(err = %self, "command failed");
        ExitCode::from(ERROR_EXIT_CODE)
    }
}

/// Execute `command`, reading a message from `stdin` if needed and writing
/// the result line to `out`.
pub fn run<R: Read, W: Write>(
    command: &Command,
    stdin: R,
    out: &mut W,
) -> Result<Outcome, CliError> {
    match command {
        Command::Tag { key, input } => {
            let auth = Authenticator::new(&decode_secret("key", key)?)?;
            let message = input.read(stdin)?;

            let tag = auth.authenticate(&message);
            tracing::info!(message_len = message.len(), "computed tag");

            writeln!(out, "{}", hex::encode(tag.as_bytes()))?;
            Ok(Outcome::Success)
        },

        Command::Verify { key, tag, input } => {
            let auth = Authenticator::new(&decode_secret("key", key)?)?;
            let tag = decode("tag", tag)?;
            let message = input.read(stdin)?;

            if auth.verify(&tag, &message)? {
                tracing::info!(message_len = message.len(), "tag verified");
                writeln!(out, "ok")?;
                Ok(Outcome::Success)
            } else {
                tracing::warn!(message_len = message.len(), "tag mismatch");
                writeln!(out, "mismatch")?;
                Ok(Outcome::Mismatch)
            }
        },

        Command::PublicKey { scalar } => {
            let public = Point::public_key(&decode_secret("scalar", scalar)?)?;
            writeln!(out, "{public}")?;
            Ok(Outcome::Success)
        },

        Command::SharedSecret { scalar, point } => {
            let peer = Point::from_bytes(&decode("point", point)?)?;
            let shared = peer.multiply(&decode_secret("scalar", scalar)?)?;
            writeln!(out, "{shared}")?;
            Ok(Outcome::Success)
        },
    }
}

fn decode(field: &'static str, value: &str) -> Result<Vec<u8>, CliError> {
    hex::decode(value.trim()).map_err(|source| CliError::Hex { field, source })
}

fn decode_secret(field: &'static str, value: &str) -> Result<Zeroizing<Vec<u8>>, CliError> {
    decode(field, value).map(Zeroizing::new)
}
