use super::ProjectivePoint;
use crate::{
    constants::SCALAR_MODULUS,
    field::{CurveField, Field, Fr},
    BlsError,
};
use core::ops::{Add, Neg};

/// Point in affine coordinates, or the point at infinity.
///
/// Finite points always satisfy the curve equation unless built through
/// `new_unchecked`. The point at infinity stores zero coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint<F> {
    x: F,
    y: F,
    infinity: bool,
}

impl<F> AffinePoint<F> {
    /// Wraps coordinates without checking the curve equation.
    #[inline]
    pub(crate) const fn new_unchecked(x: F, y: F) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Affine `x` coordinate. Zero for the point at infinity.
    #[inline]
    pub const fn x(&self) -> &F {
        &self.x
    }

    /// Affine `y` coordinate. Zero for the point at infinity.
    #[inline]
    pub const fn y(&self) -> &F {
        &self.y
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.infinity
    }
}

impl<F: CurveField> AffinePoint<F> {
    /// Creates a finite point, checking the curve equation.
    pub fn new(x: F, y: F) -> Result<Self, BlsError> {
        let point = Self::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(BlsError::PointNotOnCurve);
        }
        Ok(point)
    }

    /// The point at infinity.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: F::ZERO,
            y: F::ZERO,
            infinity: true,
        }
    }

    /// Checks `y^2 = x^3 + B`. The point at infinity is not on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return false;
        }
        self.y.square() == self.x.square() * self.x + F::B
    }

    /// Returns `true` if the point lies in the order `r` subgroup.
    ///
    /// Always true on G1, whose cofactor is one. On G2 this costs a full
    /// scalar multiplication.
    pub fn is_torsion_free(&self) -> bool {
        self.to_projective().mul_uint(&SCALAR_MODULUS).is_identity()
    }

    /// Converts to Jacobian coordinates.
    #[inline]
    pub fn to_projective(&self) -> ProjectivePoint<F> {
        if self.infinity {
            return ProjectivePoint::identity();
        }
        ProjectivePoint::new_unchecked(self.x, self.y, F::ONE)
    }

    /// Multiplies the point by a scalar and normalizes the result.
    pub fn mul_scalar(&self, scalar: &Fr) -> Self {
        self.to_projective().mul_scalar(scalar).to_affine()
    }
}

impl<F: CurveField> Add for AffinePoint<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (self.to_projective() + rhs.to_projective()).to_affine()
    }
}

impl<F: CurveField> Neg for AffinePoint<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.infinity {
            return self;
        }
        Self::new_unchecked(self.x, -self.y)
    }
}
