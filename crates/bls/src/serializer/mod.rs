//! Point encodings for the on-chain verifier and for the randomness beacon.
//!
//! * [`verifier`]: 32-byte big-endian words in EIP-197 order, G2 as
//!   `(x.imag, x.real, y.imag, y.real)`.
//! * [`compact`]: the beacon's flat `x || y` byte blobs.
//!
//! Both use `(0, 0)` for the point at infinity. Decoding checks that each
//! coordinate is below `p` before checking the curve equation.

pub mod compact;
pub mod verifier;

use crate::{
    constants::{FQ2_LEN, FQ_LEN, G1_LEN, G2_LEN},
    field::{Field, Fp, Fp2},
    group::{G1Point, G2Point},
    BlsError,
};
use verifier::{G1Words, G2Words};

/// Reads a single `Fp` from the first 32 bytes of `input`.
///
/// # Panics
///
/// Panics if the input is not at least 32 bytes long.
#[inline]
fn read_fq(input: &[u8]) -> Result<Fp, BlsError> {
    let mut bytes = [0u8; FQ_LEN];
    bytes.copy_from_slice(&input[..FQ_LEN]);
    Fp::from_be_bytes(&bytes)
}

/// Reads an `Fp2` with the imaginary part first.
///
/// # Panics
///
/// Panics if the input is not at least 64 bytes long.
#[inline]
fn read_fq2(input: &[u8]) -> Result<Fp2, BlsError> {
    let c1 = read_fq(&input[..FQ_LEN])?;
    let c0 = read_fq(&input[FQ_LEN..FQ2_LEN])?;
    Ok(Fp2::new(c0, c1))
}

/// Creates a G1 point, mapping `(0, 0)` to the point at infinity.
#[inline]
fn new_g1_point(x: Fp, y: Fp) -> Result<G1Point, BlsError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G1Point::identity());
    }
    G1Point::new(x, y)
}

/// Creates a G2 point, mapping `(0, 0)` to the point at infinity.
#[inline]
fn new_g2_point(x: Fp2, y: Fp2) -> Result<G2Point, BlsError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G2Point::identity());
    }
    G2Point::new(x, y)
}

/// Decodes a 64-byte `x || y` G1 point.
fn read_g1_point(input: &[u8]) -> Result<G1Point, BlsError> {
    check_len(input, G1_LEN)?;
    let x = read_fq(&input[..FQ_LEN])?;
    let y = read_fq(&input[FQ_LEN..G1_LEN])?;
    new_g1_point(x, y)
}

/// Decodes a 128-byte G2 point, imaginary parts first.
fn read_g2_point(input: &[u8]) -> Result<G2Point, BlsError> {
    check_len(input, G2_LEN)?;
    let x = read_fq2(&input[..FQ2_LEN])?;
    let y = read_fq2(&input[FQ2_LEN..G2_LEN])?;
    new_g2_point(x, y)
}

/// Encodes a G1 point as `x || y`.
fn encode_g1_point(point: &G1Point) -> [u8; G1_LEN] {
    let mut out = [0u8; G1_LEN];
    out[..FQ_LEN].copy_from_slice(&point.x().to_be_bytes());
    out[FQ_LEN..].copy_from_slice(&point.y().to_be_bytes());
    out
}

/// Encodes a G2 point as `x.imag || x.real || y.imag || y.real`.
fn encode_g2_point(point: &G2Point) -> [u8; G2_LEN] {
    let mut out = [0u8; G2_LEN];
    let (x, y) = (point.x(), point.y());
    for (chunk, fq) in out
        .chunks_exact_mut(FQ_LEN)
        .zip([x.imag(), x.real(), y.imag(), y.real()])
    {
        chunk.copy_from_slice(&fq.to_be_bytes());
    }
    out
}

#[inline]
fn check_len(input: &[u8], expected: usize) -> Result<(), BlsError> {
    if input.len() != expected {
        return Err(BlsError::InvalidLength {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}

/// Returns `true` if both words are below `p` and satisfy the G1 equation.
///
/// `(0, 0)` is not on the curve.
pub fn is_on_curve_g1(words: &G1Words) -> bool {
    let (Ok(x), Ok(y)) = (Fp::from_uint(words[0]), Fp::from_uint(words[1])) else {
        return false;
    };
    G1Point::new(x, y).is_ok()
}

/// Returns `true` if all four words are below `p` and satisfy the twist equation.
///
/// Words are in verifier order `(x.imag, x.real, y.imag, y.real)`.
pub fn is_on_curve_g2(words: &G2Words) -> bool {
    let coords = (
        Fp::from_uint(words[1]),
        Fp::from_uint(words[0]),
        Fp::from_uint(words[3]),
        Fp::from_uint(words[2]),
    );
    let (Ok(x0), Ok(x1), Ok(y0), Ok(y1)) = coords else {
        return false;
    };
    G2Point::new(Fp2::new(x0, x1), Fp2::new(y0, y1)).is_ok()
}

/// Returns `true` for an in-range, on-curve, non-identity G1 point.
pub fn is_valid_signature(words: &G1Words) -> bool {
    verifier::deserialize_g1(words).is_ok_and(|point| !point.is_identity())
}

/// Returns `true` for an in-range, on-curve, non-identity G2 point in the
/// order `r` subgroup.
pub fn is_valid_public_key(words: &G2Words) -> bool {
    verifier::deserialize_g2(words)
        .is_ok_and(|point| !point.is_identity() && point.is_torsion_free())
}
