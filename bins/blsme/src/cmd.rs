pub mod args;
pub mod beacon;
pub mod hash;
pub mod keygen;
pub mod sign;

use crate::logger::LogLevel;
use alloy_primitives::{hex, U256};
use bls::BlsError;
use clap::{Parser, Subcommand};
use serde::Serialize;

/// BLS signatures over BN254.
#[derive(Parser, Debug)]
#[command(name = "blsme", version, infer_subcommands = true)]
pub struct MainCmd {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,
}

/// `blsme` subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hash a message to a G1 point
    Hash(hash::Cmd),
    /// Sign a message with a seed-derived key
    Sign(sign::Cmd),
    /// Derive a public key, from a fresh random seed unless one is given
    Keygen(keygen::Cmd),
    /// Print the verifier arguments for a signed message
    Args(args::Cmd),
    /// Inspect a randomness beacon round
    Beacon(beacon::Cmd),
}

/// Errors surfaced by the subcommands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad input or an encoding the library rejected.
    #[error(transparent)]
    Bls(#[from] BlsError),
    /// Output could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MainCmd {
    /// Runs the selected subcommand and prints its JSON output.
    pub fn run(&self) -> Result<(), Error> {
        match &self.command {
            Command::Hash(cmd) => print_json(&cmd.output()?),
            Command::Sign(cmd) => print_json(&cmd.output()?),
            Command::Keygen(cmd) => print_json(&cmd.output()?),
            Command::Args(cmd) => print_json(&cmd.output()?),
            Command::Beacon(cmd) => print_json(&cmd.output()?),
        }
    }
}

/// Pretty-prints `value` to stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `0x`-prefixed, zero-padded 32-byte word.
fn word_hex(word: &U256) -> String {
    hex::encode_prefixed(word.to_be_bytes::<32>())
}
