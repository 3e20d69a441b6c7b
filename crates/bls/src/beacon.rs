//! Helpers for the drand-style randomness beacon on BN254.
//!
//! Each round signs `keccak256(round)` with the round number as an 8-byte
//! big-endian integer, hashed to G1 under [`DEFAULT_DOMAIN`]. The published
//! randomness is the SHA-256 of the signature in compact encoding.

use crate::{
    constants::DEFAULT_DOMAIN, group::G1Point, hash_to_curve::hash_to_point,
    serializer::compact, BlsError,
};
use alloy_primitives::{keccak256, B256};
use sha2::{Digest, Sha256};

/// Message signed for `round`.
#[inline]
pub fn round_message(round: u64) -> B256 {
    keccak256(round.to_be_bytes())
}

/// Hashes the message of `round` to G1.
pub fn round_point(round: u64) -> Result<G1Point, BlsError> {
    hash_to_point(DEFAULT_DOMAIN.as_bytes(), round_message(round).as_slice())
}

/// Randomness derived from a round signature.
pub fn randomness(signature: &G1Point) -> B256 {
    B256::from(<[u8; 32]>::from(Sha256::digest(compact::marshal_g1(signature))))
}
