use super::AffinePoint;
use crate::field::{CurveField, Field, Fr};
use alloy_primitives::U256;
use core::ops::{Add, Neg};

/// Point in Jacobian coordinates `(X, Y, Z)` representing `(X / Z^2, Y / Z^3)`.
///
/// The point at infinity has `Z = 0`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<F> {
    x: F,
    y: F,
    z: F,
}

impl<F: CurveField> ProjectivePoint<F> {
    #[inline]
    pub(crate) const fn new_unchecked(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// The point at infinity.
    #[inline]
    pub fn identity() -> Self {
        Self::new_unchecked(F::ZERO, F::ONE, F::ZERO)
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Point doubling, `dbl-2009-l` for `a = 0`.
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();
        Self::new_unchecked(x3, y3, z3)
    }

    /// Normalizes to affine coordinates.
    pub fn to_affine(&self) -> AffinePoint<F> {
        let Some(z_inv) = self.z.inverse() else {
            return AffinePoint::identity();
        };
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;
        AffinePoint::new_unchecked(self.x * z_inv2, self.y * z_inv3)
    }

    /// Multiplies the point by a scalar field element.
    #[inline]
    pub fn mul_scalar(&self, scalar: &Fr) -> Self {
        self.mul_uint(&scalar.into_uint())
    }

    /// Multiplies the point by a 256-bit integer.
    ///
    /// Montgomery ladder over every bit, so the sequence of group operations
    /// does not depend on the value of `k`.
    pub fn mul_uint(&self, k: &U256) -> Self {
        let mut r0 = Self::identity();
        let mut r1 = *self;
        for i in (0..U256::BITS).rev() {
            if k.bit(i) {
                r0 = r0 + r1;
                r1 = r1.double();
            } else {
                r1 = r0 + r1;
                r0 = r0.double();
            }
        }
        r0
    }
}

impl<F: CurveField> Add for ProjectivePoint<F> {
    type Output = Self;

    /// Point addition, `add-2007-bl`.
    fn add(self, rhs: Self) -> Self {
        if self.is_identity() {
            return rhs;
        }
        if rhs.is_identity() {
            return self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        let h = u2 - u1;
        let r = (s2 - s1).double();
        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return Self::identity();
        }

        let i = h.double().square();
        let j = h * i;
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;
        Self::new_unchecked(x3, y3, z3)
    }
}

impl<F: CurveField> Neg for ProjectivePoint<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new_unchecked(self.x, -self.y, self.z)
    }
}

impl<F: CurveField> PartialEq for ProjectivePoint<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                // X1 * Z2^2 == X2 * Z1^2 and Y1 * Z2^3 == Y2 * Z1^3
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                self.x * z2z2 == other.x * z1z1
                    && self.y * z2z2 * other.z == other.y * z1z1 * self.z
            }
            _ => false,
        }
    }
}

impl<F: CurveField> Eq for ProjectivePoint<F> {}
