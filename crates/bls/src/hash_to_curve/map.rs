use crate::{
    constants::SQRT_MINUS_THREE,
    field::{CurveField, Field, Fp},
    group::G1Point,
    BlsError,
};
use alloy_primitives::{uint, U256};
use log::trace;
use once_cell::race::OnceBox;
use std::boxed::Box;

/// Constants of the Fouque-Tibouchi map for `y^2 = x^3 + 3`.
#[derive(Debug)]
struct MapConstants {
    /// `sqrt(-3)`
    c1: Fp,
    /// `(sqrt(-3) - 1) / 2`
    c2: Fp,
    /// `1 + B`
    b_plus_one: Fp,
}

impl MapConstants {
    fn new() -> Self {
        let c1 = Fp::from_uint_unchecked(SQRT_MINUS_THREE);
        debug_assert_eq!(c1.square(), -Fp::from(3));
        // (p + 1) / 2 = 1 / 2
        let half = Fp::from_uint_unchecked((Fp::MODULUS + uint!(1_U256)) >> 1_usize);
        Self {
            c1,
            c2: (c1 - Fp::ONE) * half,
            b_plus_one: Fp::B + Fp::ONE,
        }
    }
}

fn constants() -> &'static MapConstants {
    static INSTANCE: OnceBox<MapConstants> = OnceBox::new();
    INSTANCE.get_or_init(|| Box::new(MapConstants::new()))
}

/// Maps a base field element to a G1 point.
///
/// Fouque-Tibouchi "Indifferentiable hashing to Barreto-Naehrig curves",
/// with the candidate order and sign rule used by the mcl library, so that
/// points agree with on-chain verifiers built against it:
///
/// ```text
/// w  = sqrt(-3) * t / (1 + b + t^2)
/// x1 = (sqrt(-3) - 1) / 2 - t * w
/// x2 = -1 - x1
/// x3 = 1 + 1 / w^2
/// ```
///
/// The first candidate with `x^3 + b` square wins, and `y` is negated when
/// `t` is a non-square.
///
/// # Errors
///
/// [`BlsError::MapToPointFailed`] for `t = 0`.
pub fn map_to_point(t: Fp) -> Result<G1Point, BlsError> {
    if t.is_zero() {
        return Err(BlsError::MapToPointFailed);
    }
    let consts = constants();
    let negative = t.legendre() < 0;

    let denominator = t.square() + consts.b_plus_one;
    // Unreachable: -(1 + b) is a non-square.
    let Some(denominator_inv) = denominator.inverse() else {
        return Err(BlsError::MapToPointFailed);
    };
    let w = consts.c1 * t * denominator_inv;

    let x1 = consts.c2 - t * w;
    let x2 = -x1 - Fp::ONE;
    let x3 = w
        .square()
        .inverse()
        .map(|inv| inv + Fp::ONE)
        .ok_or(BlsError::MapToPointFailed)?;

    for (branch, x) in [x1, x2, x3].into_iter().enumerate() {
        let Some(y) = (x.square() * x + Fp::B).sqrt() else {
            continue;
        };
        trace!("map_to_point: candidate x{} selected", branch + 1);
        let y = if negative { -y } else { y };
        return Ok(G1Point::new_unchecked(x, y));
    }
    // One of the three candidates is always a square.
    Err(BlsError::MapToPointFailed)
}

/// Reduces an arbitrary 256-bit integer into `Fp` and maps it to G1.
pub fn map_to_point_raw(value: U256) -> Result<G1Point, BlsError> {
    map_to_point(Fp::from_uint_reduced(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one(
        "0x01",
        "0x09ada94a2d09ecd55acb1b6d4732ff1404781e147c9a5fe573a879ef0ce5cc40",
        "0x0c13c679211acf4c754446808b9d61256aead7d728ca2215a354acd190f58771"
    )]
    #[case::two(
        "0x02",
        "0x183227397098d014dc2822db40c0ac2ecbc0b548b438e5469e10460b6c3e7ea3",
        "0x0a6ea289876b139cfe2cd1f08c065a2ab4aad542eaccb013520ea36934e877b4"
    )]
    #[case::three(
        "0x03",
        "0x03b8f2579b2b33b44e118d21072e5aec1c3692fd00a0b1000a662a7893bad868",
        "0x0fd475245db2f1455f7457cfa6a52f6e39c1f5d368c7683d4a2194ee3e63e1c9"
    )]
    #[case::five(
        "0x05",
        "0x1406321de198f2d3b97e8e396c42316eea8cccbf097e7c2d46817f2d468bfede",
        "0x0348cc81649cb14736402e750700f311f8cd9c80e0d68718547a83261a923cd3"
    )]
    #[case::small(
        "0x1234",
        "0x143fac30fd477ef6d8be9769db9e448f01bfe50b96b8fd5b903b9d4e72867158",
        "0x06c3aee840b120780e7fb3e124badb0612dd9419c0ffbdc1e730fb144b0c216d"
    )]
    #[case::minus_one(
        "0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46",
        "0x09ada94a2d09ecd55acb1b6d4732ff1404781e147c9a5fe573a879ef0ce5cc40",
        "0x245087f9c016d0dd430bff35f5e3f7382c9692ba3fa7a87798cbdf45478775d6"
    )]
    fn maps_to_reference_points(#[case] t: &str, #[case] x: &str, #[case] y: &str) {
        let point = map_to_point_raw(t.parse().unwrap()).unwrap();
        assert!(point.is_on_curve());
        assert_eq!(point.x().into_uint(), x.parse::<U256>().unwrap());
        assert_eq!(point.y().into_uint(), y.parse::<U256>().unwrap());
    }

    #[test]
    fn negated_input_mirrors_point() {
        let t = Fp::from(0x1234);
        let p = map_to_point(t).unwrap();
        let q = map_to_point(-t).unwrap();
        // t and -t share the same candidate x, and -1 is a non-square.
        assert_eq!(q, -p);
    }

    #[test]
    fn zero_has_no_image() {
        assert_eq!(map_to_point(Fp::ZERO), Err(BlsError::MapToPointFailed));
        assert_eq!(
            map_to_point_raw(Fp::MODULUS),
            Err(BlsError::MapToPointFailed)
        );
    }

    #[test]
    fn constants_are_consistent() {
        let c = constants();
        assert_eq!(c.c2.double() + Fp::ONE, c.c1);
        assert_eq!(c.b_plus_one, Fp::from(4));
    }
}
