use super::{word_hex, Error};
use bls::{hash_to_point, serializer::verifier, MessageInput, DEFAULT_DOMAIN};
use clap::Parser;
use serde::Serialize;

/// `hash` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Message to hash
    ///
    /// `0x`-prefixed hex is decoded to bytes, anything else is hashed as UTF-8 text.
    message: MessageInput,
    /// Domain separation tag, read the same way as the message
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: MessageInput,
}

/// Hashed point in verifier words.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Output {
    pub x: String,
    pub y: String,
}

impl Cmd {
    /// Hashes the message under the domain.
    pub fn output(&self) -> Result<Output, Error> {
        let domain = self.domain.clone().into_bytes()?;
        let message = self.message.clone().into_bytes()?;
        slog::debug!(slog_scope::logger(), "hashing message";
            "len" => message.len(), "domain_len" => domain.len());

        let [x, y] = verifier::serialize_g1(&hash_to_point(&domain, &message)?);
        Ok(Output {
            x: word_hex(&x),
            y: word_hex(&y),
        })
    }
}
