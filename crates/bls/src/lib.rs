//! # bls-bn254
//!
//! BLS signatures over the BN254 curve with public keys in G2 and signatures
//! in G1. Messages are hashed to G1 with a Keccak-256 `expand_message_xmd`
//! and the mcl Fouque-Tibouchi map, so the output can be verified by the
//! BN254 pairing precompile.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod beacon;
pub mod constants;
mod error;
pub mod field;
pub mod group;
pub mod hash_to_curve;
pub mod input;
pub mod keys;
pub mod serializer;

pub use constants::DEFAULT_DOMAIN;
pub use error::BlsError;
pub use field::{Fp, Fp2, Fr};
pub use group::{G1Point, G2Point};
pub use hash_to_curve::{hash_to_point, hash_to_point_default};
pub use input::MessageInput;
pub use keys::{sign, to_verifier_args, KeyPair, SecretKey, VerifierArgs};
pub use serializer::{is_on_curve_g1, is_on_curve_g2, is_valid_public_key, is_valid_signature};
