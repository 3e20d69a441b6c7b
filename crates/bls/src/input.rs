//! Message and domain inputs given as text.

use crate::BlsError;
use alloy_primitives::hex;
use core::{convert::Infallible, str::FromStr};
use std::{string::String, vec::Vec};

/// Bytes to hash, either given directly or as command-line text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageInput {
    /// Bytes used as-is.
    RawBytes(Vec<u8>),
    /// `0x`-prefixed hex string.
    HexEncoded(String),
    /// Text hashed as its UTF-8 bytes.
    Utf8Text(String),
}

impl MessageInput {
    /// Classifies `s`.
    ///
    /// A `0x` prefix followed only by hex digits, including the bare `0x`,
    /// is [`MessageInput::HexEncoded`]. Anything else is
    /// [`MessageInput::Utf8Text`].
    pub fn detect(s: &str) -> Self {
        match s.strip_prefix("0x") {
            Some(digits) if digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Self::HexEncoded(s.into())
            }
            _ => Self::Utf8Text(s.into()),
        }
    }

    /// Resolves the input to the bytes that get hashed.
    ///
    /// # Errors
    ///
    /// [`BlsError::InvalidHex`] for hex input of odd length.
    pub fn into_bytes(self) -> Result<Vec<u8>, BlsError> {
        match self {
            Self::RawBytes(bytes) => Ok(bytes),
            Self::HexEncoded(s) => Ok(hex::decode(s)?),
            Self::Utf8Text(s) => Ok(s.into_bytes()),
        }
    }
}

impl FromStr for MessageInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::detect(s))
    }
}

impl From<Vec<u8>> for MessageInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::RawBytes(bytes)
    }
}
