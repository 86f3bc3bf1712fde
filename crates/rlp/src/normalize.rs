//! Normalization of `0x`-prefixed hex fields into RLP byte strings.
//!
//! JSON-RPC renders numeric quantities without leading zeros (`"0x0"`, `"0x5208"`) and raw data
//! as full bytes (`"0x"`, `"0x3535...35"`). RLP has no explicit zero: a zero quantity is the empty
//! byte string, so the two kinds of field are normalized differently.

use crate::{NormalizeError, NormalizeResult, RlpItem};
use alloc::{format, vec::Vec};
use alloy_primitives::{
    hex::{self, FromHexError},
    Bytes,
};

/// A field as it appears in a JSON-RPC object, tagged with how it must be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexField<'a> {
    /// A big-endian unsigned integer. Leading zero bytes are dropped, so zero becomes the empty
    /// byte string.
    Quantity(&'a str),
    /// A raw byte string, such as an address, storage key or calldata. Every byte is kept.
    Data(&'a str),
    /// A nested list of fields. Each leaf is normalized on its own and the structure is kept,
    /// so an empty list stays an empty list.
    List(Vec<HexField<'a>>),
}

impl HexField<'_> {
    /// Normalizes the field into an [RlpItem].
    pub fn normalize(&self) -> NormalizeResult<RlpItem> {
        match self {
            Self::Quantity(field) => normalize_quantity(field).map(RlpItem::Bytes),
            Self::Data(field) => normalize_data(field).map(RlpItem::Bytes),
            Self::List(fields) => fields
                .iter()
                .map(Self::normalize)
                .collect::<NormalizeResult<Vec<_>>>()
                .map(RlpItem::List),
        }
    }
}

/// Normalizes a hex quantity into its minimal big-endian byte string.
///
/// Any representation of zero (`"0x0"`, `"0x00"`, `"0x"`) yields an empty byte string, never a
/// single `0x00` byte.
pub fn normalize_quantity(field: &str) -> NormalizeResult<Bytes> {
    let bytes = decode_digits(hex_digits(field)?)?;
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    Ok(Bytes::copy_from_slice(&bytes[start..]))
}

/// Normalizes a hex data string into its bytes. An odd number of nibbles is left-padded with a
/// zero nibble.
pub fn normalize_data(field: &str) -> NormalizeResult<Bytes> {
    decode_digits(hex_digits(field)?).map(Into::into)
}

/// Strips the `0x` prefix from `field` and validates the remaining digits.
fn hex_digits(field: &str) -> NormalizeResult<&str> {
    let digits = field.strip_prefix("0x").ok_or_else(|| NormalizeError::MissingPrefix(field.into()))?;

    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(NormalizeError::InvalidHex(FromHexError::InvalidHexCharacter {
            c,
            index: index + 2,
        }));
    }

    let upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    let lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    if upper && lower {
        return Err(NormalizeError::MixedCase(field.into()));
    }

    Ok(digits)
}

/// Decodes validated hex digits, padding an odd nibble count on the left.
fn decode_digits(digits: &str) -> NormalizeResult<Vec<u8>> {
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    decoded.map_err(NormalizeError::InvalidHex)
}
