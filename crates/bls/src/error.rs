use core::fmt;

/// Errors returned by hashing, key handling and point decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlsError {
    /// Domain separation tag is longer than 255 bytes.
    DomainTooLong,
    /// Requested expansion needs more than 255 hash blocks.
    InvalidExpansionLength,
    /// Coordinate is not smaller than the field modulus.
    FieldOverflow,
    /// Coordinates are in range but do not satisfy the curve equation.
    PointNotOnCurve,
    /// Secret scalar is zero or not smaller than the group order.
    InvalidScalar,
    /// Map to curve has no image for the given field element.
    MapToPointFailed,
    /// Encoded input has the wrong length.
    InvalidLength {
        /// Length the decoder expects.
        expected: usize,
        /// Length it was given.
        actual: usize,
    },
    /// Input is not valid hex.
    InvalidHex,
}

impl core::error::Error for BlsError {}

impl fmt::Display for BlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::DomainTooLong => "domain separation tag longer than 255 bytes",
            Self::InvalidExpansionLength => "invalid xmd expansion length",
            Self::FieldOverflow => "field element not smaller than the field modulus",
            Self::PointNotOnCurve => "point is not on the curve",
            Self::InvalidScalar => "secret scalar out of range",
            Self::MapToPointFailed => "field element has no image on the curve",
            Self::InvalidLength { expected, actual } => {
                return write!(f, "invalid input length: expected {expected}, got {actual}");
            }
            Self::InvalidHex => "invalid hex string",
        };
        f.write_str(s)
    }
}

impl From<alloy_primitives::hex::FromHexError> for BlsError {
    fn from(_: alloy_primitives::hex::FromHexError) -> Self {
        Self::InvalidHex
    }
}
