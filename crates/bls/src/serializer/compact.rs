//! Compact beacon wire format.
//!
//! The beacon network publishes points as flat byte strings:
//!
//! * G1: 64 bytes, `x || y`.
//! * G2: 128 bytes, `x.imag || x.real || y.imag || y.real`.
//!
//! Every component is a 32-byte big-endian integer below `p`. The network's
//! own library stores limbs little-endian and byte-swaps each component on
//! output, which is where the big-endian words come from.

use super::{encode_g1_point, encode_g2_point, read_g1_point, read_g2_point};
use crate::{
    constants::{G1_LEN, G2_LEN},
    group::{G1Point, G2Point},
    BlsError,
};
use alloy_primitives::hex;
use std::string::String;

/// Marshals a G1 point.
pub fn marshal_g1(point: &G1Point) -> [u8; G1_LEN] {
    encode_g1_point(point)
}

/// Marshals a G2 point.
pub fn marshal_g2(point: &G2Point) -> [u8; G2_LEN] {
    encode_g2_point(point)
}

/// Unmarshals a 64-byte G1 point.
pub fn unmarshal_g1(input: &[u8]) -> Result<G1Point, BlsError> {
    read_g1_point(input)
}

/// Unmarshals a 128-byte G2 point.
pub fn unmarshal_g2(input: &[u8]) -> Result<G2Point, BlsError> {
    read_g2_point(input)
}

/// Marshals a G1 point to lowercase hex without prefix.
pub fn marshal_g1_hex(point: &G1Point) -> String {
    hex::encode(marshal_g1(point))
}

/// Marshals a G2 point to lowercase hex without prefix.
pub fn marshal_g2_hex(point: &G2Point) -> String {
    hex::encode(marshal_g2(point))
}

/// Unmarshals a hex G1 point, with or without `0x` prefix.
pub fn unmarshal_g1_hex(s: &str) -> Result<G1Point, BlsError> {
    unmarshal_g1(&hex::decode(s)?)
}

/// Unmarshals a hex G2 point, with or without `0x` prefix.
pub fn unmarshal_g2_hex(s: &str) -> Result<G2Point, BlsError> {
    unmarshal_g2(&hex::decode(s)?)
}

/// Returns `true` for a well-formed, non-identity signature encoding.
pub fn is_valid_signature(input: &[u8]) -> bool {
    unmarshal_g1(input).is_ok_and(|point| !point.is_identity())
}

/// Returns `true` for a well-formed, non-identity public key encoding in
/// the order `r` subgroup.
pub fn is_valid_public_key(input: &[u8]) -> bool {
    unmarshal_g2(input).is_ok_and(|point| !point.is_identity() && point.is_torsion_free())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use rstest::rstest;

    /// Group public key of the drand BN254 test network.
    const BEACON_PUBLIC_KEY: &str = "\
        23c481bf1f32e4ce0c421d9408959b0ba59ad2671a55ae271ee685cee48a516f\
        2ce733a719d57494963388057c26dcf10ac9fe62fab4571948c729f0dbb44017\
        124ee2ce5bbb9f131b1730e639d65d76819bd920984b86efc2142c5274720891\
        1c4aab034dd68e6c83daf63673df99bd3a6b8cf95f2079ba3b25378a02d618b3";

    /// Signature of round 2 under [`BEACON_PUBLIC_KEY`].
    const ROUND_2_SIGNATURE: &str = "\
        04f6e9c2b5877d798e742363d075999a5493c3eb96f7c7923c6115bcc8b534a0\
        10c8d7068d7738c39d499ce7b084b65d65c8223106e33da12b1b862bccdb9222";

    const FIELD_MODULUS_PLUS_ONE: &str =
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd48";

    #[test]
    fn beacon_points_decode() {
        let public_key = unmarshal_g2_hex(BEACON_PUBLIC_KEY).unwrap();
        assert!(public_key.is_on_curve());
        assert_eq!(marshal_g2_hex(&public_key), BEACON_PUBLIC_KEY);
        assert_eq!(
            public_key.x().imag().into_uint(),
            "0x23c481bf1f32e4ce0c421d9408959b0ba59ad2671a55ae271ee685cee48a516f"
                .parse::<U256>()
                .unwrap()
        );

        let signature = unmarshal_g1_hex(&format!("0x{ROUND_2_SIGNATURE}")).unwrap();
        assert!(signature.is_on_curve());
        assert_eq!(marshal_g1_hex(&signature), ROUND_2_SIGNATURE);
    }

    #[test]
    fn beacon_validity() {
        let public_key = hex::decode(BEACON_PUBLIC_KEY).unwrap();
        let signature = hex::decode(ROUND_2_SIGNATURE).unwrap();
        assert!(is_valid_public_key(&public_key));
        assert!(is_valid_signature(&signature));
    }

    #[rstest]
    #[case::tampered_last_byte(
        "04f6e9c2b5877d798e742363d075999a5493c3eb96f7c7923c6115bcc8b534a0\
         10c8d7068d7738c39d499ce7b084b65d65c8223106e33da12b1b862bccdb9200"
    )]
    #[case::x_overflow(
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd48\
         0000000000000000000000000000000000000000000000000000000000000000"
    )]
    #[case::y_overflow(
        "0000000000000000000000000000000000000000000000000000000000000000\
         30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd48"
    )]
    #[case::identity(
        "0000000000000000000000000000000000000000000000000000000000000000\
         0000000000000000000000000000000000000000000000000000000000000000"
    )]
    #[case::short("04f6e9c2")]
    fn invalid_signatures(#[case] input: &str) {
        assert!(!is_valid_signature(&hex::decode(input).unwrap()));
    }

    #[rstest]
    #[case::tampered_tail(None)]
    #[case::x_imag_overflow(Some(0))]
    #[case::x_real_overflow(Some(1))]
    #[case::y_imag_overflow(Some(2))]
    #[case::y_real_overflow(Some(3))]
    fn invalid_public_keys(#[case] overflow_word: Option<usize>) {
        let mut input = hex::decode(BEACON_PUBLIC_KEY).unwrap();
        match overflow_word {
            Some(word) => input[word * 32..(word + 1) * 32]
                .copy_from_slice(&hex::decode(FIELD_MODULUS_PLUS_ONE).unwrap()),
            None => input[G2_LEN - 1] = 0x00,
        }
        assert!(!is_valid_public_key(&input));
        assert!(unmarshal_g2(&input).is_err());
    }

    #[test]
    fn overflow_is_reported_before_curve_check() {
        let mut input = [0u8; G1_LEN];
        input[..32].copy_from_slice(&hex::decode(FIELD_MODULUS_PLUS_ONE).unwrap());
        assert_eq!(unmarshal_g1(&input), Err(BlsError::FieldOverflow));
        assert_eq!(unmarshal_g1_hex("zz"), Err(BlsError::InvalidHex));
    }
}
