use super::{CurveField, Field, Fp};
use crate::constants::{G2_B_IMAG, G2_B_REAL};
use core::ops::{Add, Mul, Neg, Sub};

/// Element `c0 + c1 * i` of `Fp2 = Fp[i] / (i^2 + 1)`.
///
/// `c0` is the real part and `c1` the imaginary part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2 {
    /// Real component.
    pub c0: Fp,
    /// Imaginary component.
    pub c1: Fp,
}

impl Fp2 {
    /// Creates an element from its real and imaginary parts.
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Real component.
    #[inline]
    pub const fn real(&self) -> Fp {
        self.c0
    }

    /// Imaginary component.
    #[inline]
    pub const fn imag(&self) -> Fp {
        self.c1
    }

    /// Returns `c0 - c1 * i`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Multiplies both components by a base field element.
    #[inline]
    pub fn scale(&self, k: Fp) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }
}

impl Field for Fp2 {
    const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);
    const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        // (a + bi)^-1 = (a - bi) / (a^2 + b^2)
        let norm = self.c0.square() + self.c1.square();
        norm.inverse().map(|t| self.conjugate().scale(t))
    }

    fn square(&self) -> Self {
        let ab = self.c0 * self.c1;
        Self::new(
            (self.c0 + self.c1) * (self.c0 - self.c1),
            ab.double(),
        )
    }
}

impl CurveField for Fp2 {
    const B: Self = Self::new(
        Fp::from_uint_unchecked(G2_B_REAL),
        Fp::from_uint_unchecked(G2_B_IMAG),
    );
}

impl Add for Fp2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for Fp2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Mul for Fp2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Karatsuba
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(v0 - v1, c1)
    }
}

impl Neg for Fp2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}
