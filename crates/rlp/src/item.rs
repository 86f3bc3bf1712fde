//! This module contains the [RlpItem] type, which carries the canonical RLP encoding of nested
//! byte strings.

use crate::{EncodeError, EncodeLimits, EncodeResult};
use alloc::vec::Vec;
use alloy_primitives::Bytes;
use alloy_rlp::{length_of_length, BufMut, Encodable, Header, EMPTY_STRING_CODE};

/// Encodes `item` into a fresh buffer, bounded by the default [EncodeLimits].
pub fn encode(item: &RlpItem) -> EncodeResult<Vec<u8>> {
    item.encode_checked(&EncodeLimits::default())
}

/// An [RlpItem] is a node of an RLP structure: a byte string or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RlpItem {
    /// A byte string. An empty string encodes as `0x80`.
    Bytes(Bytes),
    /// An ordered list of items. An empty list encodes as `0xC0`.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Returns an empty byte string item.
    pub const fn empty_bytes() -> Self {
        Self::Bytes(Bytes::new())
    }

    /// Returns an empty list item.
    pub const fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Returns `true` if the item is a [RlpItem::List].
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the list nesting depth of the item. A byte string has depth 0, and a list has
    /// depth one greater than its deepest element.
    ///
    /// This walks the entire structure; prefer [RlpItem::encode_checked] for untrusted input,
    /// which stops descending once the configured limit is crossed.
    pub fn depth(&self) -> usize {
        match self {
            Self::Bytes(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Encodes the item after checking it against `limits`.
    ///
    /// Fails with [EncodeError::TooDeep] if lists nest deeper than `limits.max_depth`, and with
    /// [EncodeError::TooLarge] if the encoding would exceed `limits.max_length` bytes. Both checks
    /// run before the output buffer is allocated.
    pub fn encode_checked(&self, limits: &EncodeLimits) -> EncodeResult<Vec<u8>> {
        if self.exceeds_depth(limits.max_depth) {
            return Err(EncodeError::TooDeep { max: limits.max_depth });
        }

        let mut payload_lengths = Vec::new();
        let length = self.collect_payload_lengths(&mut payload_lengths);
        if length > limits.max_length {
            return Err(EncodeError::TooLarge { length, max: limits.max_length });
        }

        let mut out = Vec::<u8>::with_capacity(length);
        self.encode_with_payload_lengths(&mut payload_lengths.iter().copied(), &mut out);
        Ok(out)
    }

    /// Returns `true` if the item nests lists more than `budget` levels deep. Recursion never
    /// goes past `budget + 1` frames.
    fn exceeds_depth(&self, budget: usize) -> bool {
        match self {
            Self::Bytes(_) => false,
            Self::List(_) if budget == 0 => true,
            Self::List(items) => items.iter().any(|item| item.exceeds_depth(budget - 1)),
        }
    }

    /// Pushes the payload length of every list in the item, in pre-order, and returns the
    /// item's encoded length. Each node is visited once.
    fn collect_payload_lengths(&self, lengths: &mut Vec<usize>) -> usize {
        match self {
            Self::Bytes(bytes) if is_single_byte(bytes) => 1,
            Self::Bytes(bytes) => length_of_length(bytes.len()) + bytes.len(),
            Self::List(items) => {
                let slot = lengths.len();
                lengths.push(0);
                let payload_length =
                    items.iter().map(|item| item.collect_payload_lengths(lengths)).sum();
                lengths[slot] = payload_length;
                length_of_length(payload_length) + payload_length
            }
        }
    }

    /// Writes the item, taking list payload lengths from `lengths` in the order
    /// [RlpItem::collect_payload_lengths] produced them.
    fn encode_with_payload_lengths(
        &self,
        lengths: &mut impl Iterator<Item = usize>,
        out: &mut dyn BufMut,
    ) {
        match self {
            Self::Bytes(bytes) if is_single_byte(bytes) => out.put_u8(bytes[0]),
            Self::Bytes(bytes) => {
                Header { list: false, payload_length: bytes.len() }.encode(out);
                out.put_slice(bytes);
            }
            Self::List(items) => {
                let payload_length = lengths.next().unwrap_or_default();
                Header { list: true, payload_length }.encode(out);
                items.iter().for_each(|item| item.encode_with_payload_lengths(lengths, out));
            }
        }
    }
}

/// A lone byte below `0x80` is its own encoding.
fn is_single_byte(bytes: &[u8]) -> bool {
    bytes.len() == 1 && bytes[0] < EMPTY_STRING_CODE
}

impl Encodable for RlpItem {
    fn encode(&self, out: &mut dyn BufMut) {
        let mut payload_lengths = Vec::new();
        self.collect_payload_lengths(&mut payload_lengths);
        self.encode_with_payload_lengths(&mut payload_lengths.into_iter(), out);
    }

    fn length(&self) -> usize {
        match self {
            Self::Bytes(bytes) if is_single_byte(bytes) => 1,
            Self::Bytes(bytes) => length_of_length(bytes.len()) + bytes.len(),
            Self::List(items) => {
                let payload_length = items.iter().map(Encodable::length).sum();
                length_of_length(payload_length) + payload_length
            }
        }
    }
}

impl From<Bytes> for RlpItem {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for RlpItem {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl From<&[u8]> for RlpItem {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(bytes))
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}
