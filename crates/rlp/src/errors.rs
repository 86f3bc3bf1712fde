//! Errors for the `txcodec-rlp` crate.

use alloc::string::String;
use alloy_primitives::hex::FromHexError;
use thiserror::Error;

/// A [Result] type alias where the error is [NormalizeError].
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// An error type for turning hex fields into byte strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The field does not start with a lowercase `0x` prefix.
    #[error("Hex field is missing the `0x` prefix: {0:?}")]
    MissingPrefix(String),
    /// The field mixes upper and lower case hex digits.
    #[error("Hex field mixes upper and lower case digits: {0:?}")]
    MixedCase(String),
    /// The field contains a non-hex character.
    #[error("Invalid hex field: {0}")]
    InvalidHex(FromHexError),
}

/// A [Result] type alias where the error is [EncodeError].
pub type EncodeResult<T> = Result<T, EncodeError>;

/// An error type for checked [RlpItem] encoding.
///
/// [RlpItem]: crate::RlpItem
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The item nests lists deeper than allowed.
    #[error("RLP structure too deep: depth exceeds {max}")]
    TooDeep {
        /// The configured maximum depth.
        max: usize,
    },
    /// The encoded item would be longer than allowed.
    #[error("RLP structure too large: {length} bytes, maximum is {max}")]
    TooLarge {
        /// The length the encoding would have.
        length: usize,
        /// The configured maximum length.
        max: usize,
    },
}
