//! Hashing of arbitrary messages to G1.
//!
//! `hash_to_point` follows the RFC 9380 random-oracle layout: the message is
//! expanded with Keccak-256 into two 48-byte field elements, each one is
//! mapped to the curve and the two points are added.

mod expand;
mod map;

pub use expand::expand_message_xmd;
pub use map::{map_to_point, map_to_point_raw};

use crate::{
    constants::{DEFAULT_DOMAIN, HASH_TO_FIELD_LEN},
    field::Fp,
    group::G1Point,
    BlsError,
};
use log::debug;
use std::vec::Vec;

/// Hashes `msg` to `count` base field elements.
///
/// The expanded output is split into 48-byte big-endian chunks, each reduced
/// modulo `p`.
pub fn hash_to_field(domain: &[u8], msg: &[u8], count: usize) -> Result<Vec<Fp>, BlsError> {
    let out_len = count
        .checked_mul(HASH_TO_FIELD_LEN)
        .ok_or(BlsError::InvalidExpansionLength)?;
    let uniform = expand_message_xmd(domain, msg, out_len)?;

    Ok(uniform
        .chunks_exact(HASH_TO_FIELD_LEN)
        .map(|chunk| {
            let mut wide = [0u8; HASH_TO_FIELD_LEN];
            wide.copy_from_slice(chunk);
            Fp::from_be_bytes_wide(&wide)
        })
        .collect())
}

/// Hashes `msg` to a G1 point under the domain separation tag `domain`.
pub fn hash_to_point(domain: &[u8], msg: &[u8]) -> Result<G1Point, BlsError> {
    let u = hash_to_field(domain, msg, 2)?;
    let p0 = map_to_point(u[0])?;
    let p1 = map_to_point(u[1])?;
    let point = p0 + p1;
    debug!("hash_to_point: x={}", point.x());
    Ok(point)
}

/// [`hash_to_point`] under [`DEFAULT_DOMAIN`].
pub fn hash_to_point_default(msg: &[u8]) -> Result<G1Point, BlsError> {
    hash_to_point(DEFAULT_DOMAIN.as_bytes(), msg)
}
