//! Verifier wire format.
//!
//! Points are tuples of 256-bit words, each below `p`, as consumed by the
//! BN254 pairing precompile. G2 words are ordered
//! `(x.imag, x.real, y.imag, y.real)`.

use super::{
    encode_g1_point, encode_g2_point, new_g1_point, new_g2_point, read_g1_point, read_g2_point,
};
use crate::{
    constants::{G1_LEN, G2_LEN},
    field::{Fp, Fp2},
    group::{G1Point, G2Point},
    BlsError,
};
use alloy_primitives::U256;
use std::vec::Vec;

/// G1 point as `(x, y)`.
pub type G1Words = [U256; 2];

/// G2 point as `(x.imag, x.real, y.imag, y.real)`.
pub type G2Words = [U256; 4];

/// Length of one pairing-check element: a G1 point followed by a G2 point.
pub const PAIR_ELEMENT_LEN: usize = G1_LEN + G2_LEN;

/// Returns the words of a G1 point. The identity is `(0, 0)`.
pub fn serialize_g1(point: &G1Point) -> G1Words {
    [point.x().into_uint(), point.y().into_uint()]
}

/// Returns the words of a G2 point. The identity is all zeros.
pub fn serialize_g2(point: &G2Point) -> G2Words {
    let (x, y) = (point.x(), point.y());
    [
        x.imag().into_uint(),
        x.real().into_uint(),
        y.imag().into_uint(),
        y.real().into_uint(),
    ]
}

/// Builds a G1 point from verifier words.
///
/// # Errors
///
/// [`BlsError::FieldOverflow`] if a word is not below `p`, then
/// [`BlsError::PointNotOnCurve`] if the words do not satisfy the curve.
pub fn deserialize_g1(words: &G1Words) -> Result<G1Point, BlsError> {
    let x = Fp::from_uint(words[0])?;
    let y = Fp::from_uint(words[1])?;
    new_g1_point(x, y)
}

/// Builds a G2 point from verifier words, see [`deserialize_g1`].
pub fn deserialize_g2(words: &G2Words) -> Result<G2Point, BlsError> {
    let x = Fp2::new(Fp::from_uint(words[1])?, Fp::from_uint(words[0])?);
    let y = Fp2::new(Fp::from_uint(words[3])?, Fp::from_uint(words[2])?);
    new_g2_point(x, y)
}

/// Encodes a G1 point as 64 bytes of calldata.
pub fn encode_g1(point: &G1Point) -> [u8; G1_LEN] {
    encode_g1_point(point)
}

/// Encodes a G2 point as 128 bytes of calldata.
pub fn encode_g2(point: &G2Point) -> [u8; G2_LEN] {
    encode_g2_point(point)
}

/// Decodes 64 bytes of calldata into a G1 point.
pub fn decode_g1(input: &[u8]) -> Result<G1Point, BlsError> {
    read_g1_point(input)
}

/// Decodes 128 bytes of calldata into a G2 point.
pub fn decode_g2(input: &[u8]) -> Result<G2Point, BlsError> {
    read_g2_point(input)
}

/// Lays out the pairing-check input `e(-sig, G2) * e(M, pk) == 1`.
///
/// The output is two [`PAIR_ELEMENT_LEN`] elements in the order expected by
/// the BN254 pairing precompile: `(-signature, G2 generator)` followed by
/// `(message, public_key)`.
pub fn pairing_check_input(
    public_key: &G2Point,
    message: &G1Point,
    signature: &G1Point,
) -> Vec<u8> {
    let mut input = Vec::with_capacity(2 * PAIR_ELEMENT_LEN);
    input.extend_from_slice(&encode_g1_point(&-*signature));
    input.extend_from_slice(&encode_g2_point(&G2Point::GENERATOR));
    input.extend_from_slice(&encode_g1_point(message));
    input.extend_from_slice(&encode_g2_point(public_key));
    input
}
