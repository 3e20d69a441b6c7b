//! Prime fields of the BN254 curve and the quadratic extension used by G2.
//!
//! Elements are kept fully reduced. Arithmetic never fails; only the strict
//! byte and integer constructors reject values that are not already reduced.

mod fp2;

pub use fp2::Fp2;

use crate::{
    constants::{FIELD_MODULUS, G1_B, SCALAR_MODULUS, TWO_POW_256_MOD_P},
    BlsError,
};
use alloy_primitives::{hex, uint, U256};
use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Arithmetic shared by the base field and its quadratic extension.
pub trait Field:
    Copy
    + Eq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Returns `true` for the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns the multiplicative inverse, or `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// Returns `self * self`.
    #[inline]
    fn square(&self) -> Self {
        *self * *self
    }

    /// Returns `self + self`.
    #[inline]
    fn double(&self) -> Self {
        *self + *self
    }
}

/// A field that carries a short Weierstrass curve `y^2 = x^3 + B`.
pub trait CurveField: Field {
    /// Constant term of the curve equation.
    const B: Self;
}

macro_rules! prime_field {
    ($(#[$attr:meta])* $name:ident, $modulus:expr, $overflow:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name(U256);

        impl $name {
            /// Field modulus.
            pub const MODULUS: U256 = $modulus;

            /// Wraps an integer that is known to be reduced.
            #[inline]
            pub(crate) const fn from_uint_unchecked(value: U256) -> Self {
                Self(value)
            }

            /// Creates an element from a reduced integer.
            #[inline]
            pub fn from_uint(value: U256) -> Result<Self, BlsError> {
                if value >= Self::MODULUS {
                    return Err($overflow);
                }
                Ok(Self(value))
            }

            /// Creates an element by reducing an arbitrary integer.
            #[inline]
            pub fn from_uint_reduced(value: U256) -> Self {
                Self(value.reduce_mod(Self::MODULUS))
            }

            /// Reads a 32-byte big-endian reduced integer.
            #[inline]
            pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, BlsError> {
                Self::from_uint(U256::from_be_bytes(*bytes))
            }

            /// Returns the 32-byte big-endian encoding.
            #[inline]
            pub fn to_be_bytes(&self) -> [u8; 32] {
                self.0.to_be_bytes()
            }

            /// Returns the canonical integer representative.
            #[inline]
            pub const fn into_uint(self) -> U256 {
                self.0
            }

            /// Raises `self` to an integer power.
            #[inline]
            pub fn pow(&self, exp: U256) -> Self {
                Self(self.0.pow_mod(exp, Self::MODULUS))
            }
        }

        impl Field for $name {
            const ZERO: Self = Self(U256::ZERO);
            const ONE: Self = Self(uint!(1_U256));

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            fn inverse(&self) -> Option<Self> {
                if self.is_zero() {
                    return None;
                }
                Some(self.pow(Self::MODULUS - uint!(2_U256)))
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.add_mod(rhs.0, Self::MODULUS))
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self + (-rhs)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0.mul_mod(rhs.0, Self::MODULUS))
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                if self.is_zero() {
                    self
                } else {
                    Self(Self::MODULUS - self.0)
                }
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self::from_uint_reduced(U256::from(value))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{})", stringify!($name), hex::encode(self.to_be_bytes()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.to_be_bytes()))
            }
        }
    };
}

prime_field!(
    /// Element of the BN254 base field `Fp`.
    Fp,
    FIELD_MODULUS,
    BlsError::FieldOverflow
);

prime_field!(
    /// Element of the BN254 scalar field `Fr`.
    Fr,
    SCALAR_MODULUS,
    BlsError::InvalidScalar
);

impl Fp {
    /// Reduces a 48-byte big-endian integer, as produced by `hash_to_field`.
    pub fn from_be_bytes_wide(bytes: &[u8; 48]) -> Self {
        let mut hi = [0u8; 32];
        hi[16..].copy_from_slice(&bytes[..16]);
        let mut lo = [0u8; 32];
        lo.copy_from_slice(&bytes[16..]);

        let hi = U256::from_be_bytes(hi).mul_mod(TWO_POW_256_MOD_P, Self::MODULUS);
        Self(hi.add_mod(U256::from_be_bytes(lo), Self::MODULUS))
    }

    /// Returns the square root `self^((p + 1) / 4)` if `self` is a square.
    ///
    /// `p = 3 mod 4`, so the exponentiation gives a root whenever one exists.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow((Self::MODULUS + uint!(1_U256)) >> 2_usize);
        (root.square() == *self).then_some(root)
    }

    /// Legendre symbol: `1` for non-zero squares, `-1` for non-squares and `0` for zero.
    pub fn legendre(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        let euler = self.pow((Self::MODULUS - uint!(1_U256)) >> 1_usize);
        if euler == Self::ONE {
            1
        } else {
            -1
        }
    }
}

impl CurveField for Fp {
    const B: Self = Self(G1_B);
}

impl Fr {
    /// Returns `true` if bit `index` of the canonical representative is set.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        self.0.bit(index)
    }
}
