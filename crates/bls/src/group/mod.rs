//! G1 and G2 point arithmetic.
//!
//! Both groups live on short Weierstrass curves `y^2 = x^3 + B` with `a = 0`,
//! so one generic implementation over [`CurveField`] serves both:
//!
//! * G1 over `Fp` with `B = 3`, generator `(1, 2)`.
//! * G2 over `Fp2` with `B = 3 / (9 + i)`, the EIP-197 generator.
//!
//! [`CurveField`]: crate::field::CurveField

mod affine;
mod projective;

pub use affine::AffinePoint;
pub use projective::ProjectivePoint;

use crate::{
    constants::{
        G2_GENERATOR_X_IMAG, G2_GENERATOR_X_REAL, G2_GENERATOR_Y_IMAG, G2_GENERATOR_Y_REAL,
    },
    field::{Fp, Fp2},
};
use alloy_primitives::uint;

/// Affine point on the G1 curve.
pub type G1Point = AffinePoint<Fp>;

/// Affine point on the G2 twist.
pub type G2Point = AffinePoint<Fp2>;

/// Jacobian point on the G1 curve.
pub type G1Projective = ProjectivePoint<Fp>;

/// Jacobian point on the G2 twist.
pub type G2Projective = ProjectivePoint<Fp2>;

impl AffinePoint<Fp> {
    /// G1 generator `(1, 2)`.
    pub const GENERATOR: Self = Self::new_unchecked(
        Fp::from_uint_unchecked(uint!(1_U256)),
        Fp::from_uint_unchecked(uint!(2_U256)),
    );
}

impl AffinePoint<Fp2> {
    /// G2 generator.
    pub const GENERATOR: Self = Self::new_unchecked(
        Fp2::new(
            Fp::from_uint_unchecked(G2_GENERATOR_X_REAL),
            Fp::from_uint_unchecked(G2_GENERATOR_X_IMAG),
        ),
        Fp2::new(
            Fp::from_uint_unchecked(G2_GENERATOR_Y_REAL),
            Fp::from_uint_unchecked(G2_GENERATOR_Y_IMAG),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::SCALAR_MODULUS,
        field::{CurveField, Field, Fr},
        BlsError,
    };
    use alloy_primitives::U256;
    use rstest::rstest;

    fn fp(hex: &str) -> Fp {
        Fp::from_uint(hex.parse::<U256>().unwrap()).unwrap()
    }

    #[test]
    fn generators_are_on_curve() {
        assert!(G1Point::GENERATOR.is_on_curve());
        assert!(G2Point::GENERATOR.is_on_curve());
        assert!(G2Point::GENERATOR.is_torsion_free());
    }

    #[rstest]
    #[case::double(
        2,
        "0x030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3",
        "0x15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4"
    )]
    #[case::seven(
        7,
        "0x17072b2ed3bb8d759a5325f477629386cb6fc6ecb801bd76983a6b86abffe078",
        "0x168ada6cd130dd52017bb54bfa19377aadfe3bf05d18f41b77809f7f60d4af9e"
    )]
    fn g1_scalar_mul(#[case] k: u64, #[case] x: &str, #[case] y: &str) {
        let expected = G1Point::new(fp(x), fp(y)).unwrap();
        assert_eq!(G1Point::GENERATOR.mul_scalar(&Fr::from(k)), expected);

        let mut sum = G1Projective::identity();
        for _ in 0..k {
            sum = sum + G1Point::GENERATOR.to_projective();
        }
        assert_eq!(sum.to_affine(), expected);
    }

    #[test]
    fn g2_double() {
        let x = Fp2::new(
            fp("0x27dc7234fd11d3e8c36c59277c3e6f149d5cd3cfa9a62aee49f8130962b4b3b9"),
            fp("0x203e205db4f19b37b60121b83a7333706db86431c6d835849957ed8c3928ad79"),
        );
        let y = Fp2::new(
            fp("0x04bb53b8977e5f92a0bc372742c4830944a59b4fe6b1c0466e2a6dad122b5d2e"),
            fp("0x195e8aa5b7827463722b8c153931579d3505566b4edf48d498e185f0509de152"),
        );
        let expected = G2Point::new(x, y).unwrap();
        let g = G2Point::GENERATOR.to_projective();
        assert_eq!(g.double().to_affine(), expected);
        assert_eq!((g + g).to_affine(), expected);
        assert_eq!(G2Point::GENERATOR.mul_scalar(&Fr::from(2)), expected);
    }

    #[test]
    fn group_order_annihilates_generators() {
        let g1 = G1Point::GENERATOR.to_projective();
        let g2 = G2Point::GENERATOR.to_projective();
        assert!(g1.mul_uint(&SCALAR_MODULUS).is_identity());
        assert!(g2.mul_uint(&SCALAR_MODULUS).is_identity());

        let minus_one = -Fr::ONE;
        assert_eq!(G1Point::GENERATOR.mul_scalar(&minus_one), -G1Point::GENERATOR);
        assert_eq!(G2Point::GENERATOR.mul_scalar(&minus_one), -G2Point::GENERATOR);
    }

    #[test]
    fn addition_edge_cases() {
        let g = G1Point::GENERATOR;
        assert!((g + -g).is_identity());
        assert_eq!(g + G1Point::identity(), g);
        assert_eq!(G1Point::identity() + g, g);
        assert_eq!(g + g, g.mul_scalar(&Fr::from(2)));
        assert!(G1Point::GENERATOR.mul_scalar(&Fr::ZERO).is_identity());
    }

    #[test]
    fn off_curve_points_are_rejected() {
        assert_eq!(
            G1Point::new(Fp::ONE, Fp::ONE),
            Err(BlsError::PointNotOnCurve)
        );
        let g = G2Point::GENERATOR;
        assert_eq!(
            G2Point::new(*g.x(), *g.x()),
            Err(BlsError::PointNotOnCurve)
        );
        // The identity is never on the curve itself.
        assert!(!G1Point::identity().is_on_curve());
        assert!(!G2Point::identity().is_on_curve());
    }

    #[test]
    fn twist_points_outside_subgroup() {
        // Small x values land on the twist but not in the order-r subgroup.
        let point = (0..64u64)
            .find_map(|k| {
                let x = Fp2::new(Fp::from(k), Fp::ONE);
                let rhs = x.square() * x + <Fp2 as CurveField>::B;
                fp2_sqrt(rhs).map(|y| G2Point::new_unchecked(x, y))
            })
            .expect("a twist point with small x");
        assert!(point.is_on_curve());
        assert!(!point.is_torsion_free());
    }

    /// Square root in `Fp2` through the norm, test-only.
    fn fp2_sqrt(a: Fp2) -> Option<Fp2> {
        let norm = (a.c0.square() + a.c1.square()).sqrt()?;
        let half = Fp::from(2).inverse()?;
        for n in [norm, -norm] {
            let Some(x0) = ((a.c0 + n) * half).sqrt() else {
                continue;
            };
            let Some(inv) = x0.double().inverse() else {
                continue;
            };
            let root = Fp2::new(x0, a.c1 * inv);
            if root.square() == a {
                return Some(root);
            }
        }
        None
    }
}
