use super::Error;
use bls::{serializer::compact, SecretKey};
use clap::Parser;
use serde::Serialize;

/// `keygen` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Seed to derive the key from
    ///
    /// When omitted, 31 random bytes are drawn and their `0x`-prefixed hex is used.
    #[arg(long)]
    seed: Option<String>,
}

/// Seed and compact public key. The seed is the secret.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub seed: String,
    pub pub_key: String,
}

impl Cmd {
    /// Derives the public key.
    pub fn output(&self) -> Result<Output, Error> {
        let (secret_key, seed) = match &self.seed {
            Some(seed) => (SecretKey::from_seed(seed.as_bytes())?, seed.clone()),
            None => {
                slog::info!(slog_scope::logger(), "drawing a fresh seed");
                SecretKey::random(&mut rand::rng())?
            }
        };

        Ok(Output {
            seed,
            pub_key: compact::marshal_g2_hex(&secret_key.public_key()),
        })
    }
}
