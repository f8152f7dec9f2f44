//! ElsieFour (LC4) command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Two-line stdin protocol: key on line 1, message on line 2.
//! # A leading '%' on the message selects encryption; without it the
//! # message is decrypted.
//! printf 's2ferw_nx346ty5odiupq#lmz8ajhgcvk79b\ntk5j23tq94_gw9c#lhzs\n' | elsie
//!
//! # Same protocol as positional arguments.
//! elsie '7dju4s_in6vkecxorlzftgq358mhy29pw#ba' '%the_swallow_flies_at_midnight'
//! ```

use std::io::{self, BufRead, Write};

use clap::Parser;
use elsie_core::{Direction, decrypt, encrypt};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ElsieFour cipher front end
#[derive(Parser, Debug)]
#[command(name = "elsie")]
#[command(about = "ElsieFour (LC4) hand-computable stream cipher")]
#[command(version)]
struct Args {
    /// Cipher key: a 36-character permutation of the LC4 alphabet
    key: Option<String>,

    /// Message to process; prefix with '%' to encrypt, omit it to decrypt
    message: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Errors from argument handling and input reading.
#[derive(Debug, Error)]
enum CliError {
    /// Key and message must be supplied together.
    #[error("a key was given without a message; pass both or pipe two lines on stdin")]
    MissingMessage,

    /// Reading the two-line stdin protocol failed.
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let (key, message) = match (args.key, args.message) {
        (Some(key), Some(message)) => (key, message),
        (Some(_), None) => return Err(CliError::MissingMessage.into()),
        _ => read_two_lines()?,
    };

    let (direction, body) = split_direction(&message);
    tracing::debug!(symbols = body.chars().count(), ?direction, "processing message");

    let output = match direction {
        Direction::Encrypt => encrypt(&key, body)?,
        Direction::Decrypt => decrypt(&key, body)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;

    Ok(())
}

/// Read the two-line text protocol from stdin: key, then message.
fn read_two_lines() -> Result<(String, String), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let key = lines.next().transpose()?.unwrap_or_default();
    let message = lines.next().transpose()?.unwrap_or_default();

    Ok((key.trim_end().to_owned(), message.trim_end().to_owned()))
}

/// Apply the sentinel convention: a leading `%` (not in the alphabet)
/// selects encryption and is stripped; anything else is decrypted as-is.
fn split_direction(message: &str) -> (Direction, &str) {
    message
        .strip_prefix('%')
        .map_or((Direction::Decrypt, message), |body| (Direction::Encrypt, body))
}
