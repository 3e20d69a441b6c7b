use super::{word_hex, Error};
use alloy_primitives::hex;
use bls::{
    beacon::{randomness, round_message, round_point},
    serializer::{compact, verifier},
};
use clap::Parser;
use serde::Serialize;

/// `beacon` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Round number
    round: u64,
    /// Round signature in compact hex
    signature: String,
    /// Group public key in compact hex
    public_key: String,
}

/// Hashed round point in verifier words.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Point {
    pub x: String,
    pub y: String,
}

/// What the beacon round commits to and whether its encodings are usable.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub round: u64,
    pub message: String,
    pub point: Point,
    pub valid_signature: bool,
    pub valid_public_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomness: Option<String>,
    /// EIP-197 pairing check input, present when both points are valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairing_input: Option<String>,
}

impl Cmd {
    /// Hashes the round and checks the signature and key encodings.
    pub fn output(&self) -> Result<Output, Error> {
        let logger = slog_scope::logger();
        let signature_bytes = hex::decode(&self.signature).map_err(bls::BlsError::from)?;
        let public_key_bytes = hex::decode(&self.public_key).map_err(bls::BlsError::from)?;

        let point = round_point(self.round)?;
        let [x, y] = verifier::serialize_g1(&point);

        let signature = compact::unmarshal_g1(&signature_bytes)
            .ok()
            .filter(|_| compact::is_valid_signature(&signature_bytes));
        let public_key = compact::unmarshal_g2(&public_key_bytes)
            .ok()
            .filter(|_| compact::is_valid_public_key(&public_key_bytes));
        if signature.is_none() {
            slog::warn!(logger, "signature is not a valid G1 point"; "round" => self.round);
        }
        if public_key.is_none() {
            slog::warn!(logger, "public key is not a valid G2 point"; "round" => self.round);
        }

        let pairing_input = signature
            .zip(public_key)
            .map(|(signature, public_key)| {
                hex::encode_prefixed(verifier::pairing_check_input(
                    &public_key,
                    &point,
                    &signature,
                ))
            });

        Ok(Output {
            round: self.round,
            message: hex::encode_prefixed(round_message(self.round)),
            point: Point {
                x: word_hex(&x),
                y: word_hex(&y),
            },
            valid_signature: signature.is_some(),
            valid_public_key: public_key.is_some(),
            randomness: signature.map(|signature| hex::encode(randomness(&signature))),
            pairing_input,
        })
    }
}
