//! Constants for BN254 (alt_bn128) BLS operations

use alloy_primitives::{uint, U256};

/// Field element length
pub const FQ_LEN: usize = 32;

/// Scalar field element length
pub const SCALAR_LEN: usize = 32;

/// Quadratic extension field element length (Fq2)
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// G1 point length (x, y coordinates)
pub const G1_LEN: usize = 2 * FQ_LEN;

/// G2 point length (x, y coordinates over Fq2)
pub const G2_LEN: usize = 2 * FQ2_LEN;

/// Base field modulus `p`.
pub const FIELD_MODULUS: U256 =
    uint!(0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47_U256);

/// Order `r` of the G1 and G2 subgroups.
pub const SCALAR_MODULUS: U256 =
    uint!(0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001_U256);

/// `2^256 mod p`, used to fold wide hash outputs into the base field.
pub(crate) const TWO_POW_256_MOD_P: U256 =
    uint!(0x0e0a77c19a07df2f666ea36f7879462c0a78eb28f5c70b3dd35d438dc58f0d9d_U256);

/// Domain separation tag used by the drand BN254 network for hashing to G1.
pub const DEFAULT_DOMAIN: &str = "BLS_SIG_BN254G1_XMD:KECCAK-256_SSWU_RO_NUL_";

/// Longest domain separation tag accepted by `expand_message_xmd`.
pub const MAX_DOMAIN_LEN: usize = 255;

/// Output size of Keccak-256, `b_in_bytes` in RFC 9380.
pub const XMD_BLOCK_LEN: usize = 32;

/// Input block size of Keccak-256, `r_in_bytes` in RFC 9380.
pub const XMD_INPUT_BLOCK_LEN: usize = 64;

/// Longest expansion in blocks.
pub const XMD_MAX_BLOCKS: usize = 255;

/// Bytes of expanded output consumed per field element, `L` in RFC 9380.
pub const HASH_TO_FIELD_LEN: usize = 48;

/// Random bytes drawn for a fresh key seed.
pub const SEED_LEN: usize = 31;

/// `B` coefficient of the G1 curve `y^2 = x^3 + 3`.
pub const G1_B: U256 = uint!(3_U256);

/// Real part of the G2 twist coefficient `3 / (9 + i)`.
pub const G2_B_REAL: U256 =
    uint!(0x2b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5_U256);

/// Imaginary part of the G2 twist coefficient `3 / (9 + i)`.
pub const G2_B_IMAG: U256 =
    uint!(0x009713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2_U256);

/// G2 generator `x.real`.
pub const G2_GENERATOR_X_REAL: U256 =
    uint!(0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed_U256);

/// G2 generator `x.imag`.
pub const G2_GENERATOR_X_IMAG: U256 =
    uint!(0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2_U256);

/// G2 generator `y.real`.
pub const G2_GENERATOR_Y_REAL: U256 =
    uint!(0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa_U256);

/// G2 generator `y.imag`.
pub const G2_GENERATOR_Y_IMAG: U256 =
    uint!(0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b_U256);

/// `sqrt(-3)` as chosen by the Fouque-Tibouchi map.
pub(crate) const SQRT_MINUS_THREE: U256 =
    uint!(0x0000000000000000b3c4d79d41a91759a9e4c7e359b6b89eaec68e62effffffd_U256);
