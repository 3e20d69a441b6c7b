//! Key pairs, signing and verifier arguments.
//!
//! Public keys live in G2 and signatures in G1, so a signature is a single
//! 64-byte point and verification costs one pairing check on chain.

use crate::{
    constants::{SCALAR_MODULUS, SEED_LEN},
    field::{Field, Fr},
    group::{G1Point, G2Point},
    serializer::verifier::{self, G1Words, G2Words},
    BlsError,
};
use alloy_primitives::{hex, uint, U256};
use core::fmt;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use std::{string::String, vec::Vec};

/// BLS secret key, a non-zero scalar.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecretKey(Fr);

impl SecretKey {
    /// Wraps a scalar, rejecting zero.
    pub fn from_scalar(scalar: Fr) -> Result<Self, BlsError> {
        if scalar.is_zero() {
            return Err(BlsError::InvalidScalar);
        }
        Ok(Self(scalar))
    }

    /// Reads a 32-byte big-endian scalar in `[1, r)`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, BlsError> {
        Self::from_scalar(Fr::from_be_bytes(bytes)?)
    }

    /// Parses a hex scalar, with or without `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, BlsError> {
        let bytes = hex::decode(s)?;
        if bytes.len() > 32 {
            return Err(BlsError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(&bytes);
        Self::from_be_bytes(&padded)
    }

    /// Derives a key by hashing a seed into `Fr`.
    ///
    /// The SHA-256 digest of `seed` is read as a little-endian integer and
    /// masked to the bit length of `r`. If the result is still not below `r`
    /// the top bit is cleared as well. This is the `setHashOf` rule of the
    /// mcl library, which the reference key derivation uses.
    pub fn from_seed(seed: &[u8]) -> Result<Self, BlsError> {
        let digest: [u8; 32] = Sha256::digest(seed).into();
        let mut value = U256::from_le_bytes(digest);

        let bits = SCALAR_MODULUS.bit_len();
        value &= mask(bits);
        if value >= SCALAR_MODULUS {
            value &= mask(bits - 1);
        }
        Self::from_scalar(Fr::from_uint(value)?)
    }

    /// Draws a fresh seed from `rng` and derives a key from it.
    ///
    /// Returns the seed text alongside the key, so the key can be re-derived
    /// with [`SecretKey::from_seed`].
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(Self, String), BlsError> {
        let mut seed = [0u8; SEED_LEN];
        rng.fill_bytes(&mut seed);
        // The seed is the `0x`-prefixed hex text, not the raw bytes.
        let seed = hex::encode_prefixed(seed);
        Ok((Self::from_seed(seed.as_bytes())?, seed))
    }

    /// Underlying scalar.
    #[inline]
    pub const fn scalar(&self) -> &Fr {
        &self.0
    }

    /// 32-byte big-endian encoding.
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Public key `sk * G2`.
    pub fn public_key(&self) -> G2Point {
        G2Point::GENERATOR.mul_scalar(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

fn mask(bits: usize) -> U256 {
    (uint!(1_U256) << bits) - uint!(1_U256)
}

/// Secret key together with its G2 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    /// Secret scalar.
    pub secret_key: SecretKey,
    /// `secret_key * G2`, normalized.
    pub public_key: G2Point,
}

impl KeyPair {
    /// Builds the pair for an existing secret key.
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        Self {
            public_key: secret_key.public_key(),
            secret_key,
        }
    }

    /// Derives a pair from seed bytes, see [`SecretKey::from_seed`].
    pub fn from_seed(seed: &[u8]) -> Result<Self, BlsError> {
        SecretKey::from_seed(seed).map(Self::from_secret_key)
    }

    /// Generates a pair from 31 random bytes drawn from `rng`.
    pub fn random_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, BlsError> {
        SecretKey::random(rng).map(|(secret_key, _)| Self::from_secret_key(secret_key))
    }

    /// Generates a pair from the thread-local CSPRNG.
    #[cfg(feature = "std")]
    pub fn random() -> Result<Self, BlsError> {
        Self::random_with_rng(&mut rand::rng())
    }

    /// Signs a message point, see [`sign`].
    #[inline]
    pub fn sign(&self, message: &G1Point) -> G1Point {
        sign(message, &self.secret_key)
    }
}

/// Signs a hashed message: `sk * M`, normalized.
pub fn sign(message: &G1Point, secret_key: &SecretKey) -> G1Point {
    message.mul_scalar(secret_key.scalar())
}

/// Public key, message point and signature in the verifier's word layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifierArgs {
    /// Signature `(x, y)`.
    pub signature: G1Words,
    /// Public key `(x.imag, x.real, y.imag, y.real)`.
    pub public_key: G2Words,
    /// Hashed message `(x, y)`.
    pub message: G1Words,
}

impl VerifierArgs {
    /// Concatenates the words as 32-byte big-endian calldata:
    /// signature, then public key, then message.
    pub fn to_calldata(&self) -> Vec<u8> {
        self.signature
            .iter()
            .chain(self.public_key.iter())
            .chain(self.message.iter())
            .flat_map(|word| word.to_be_bytes::<32>())
            .collect()
    }
}

/// Packages a public key, message point and signature for the verifier.
pub fn to_verifier_args(
    public_key: &G2Point,
    message: &G1Point,
    signature: &G1Point,
) -> VerifierArgs {
    VerifierArgs {
        signature: verifier::serialize_g1(signature),
        public_key: verifier::serialize_g2(public_key),
        message: verifier::serialize_g1(message),
    }
}
