//! Testing utilities for `txcodec-rlp`.
//!
//! Decoding is not part of the codec's surface. The [Decodable] implementation here exists so
//! that tests can check encodings structurally.

use crate::RlpItem;
use alloc::vec::Vec;
use alloy_primitives::Bytes;
use alloy_rlp::{Decodable, Header};

impl Decodable for RlpItem {
    /// Decodes one [RlpItem] from the front of `buf`, advancing past it.
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if header.payload_length > buf.len() {
            return Err(alloy_rlp::Error::InputTooShort);
        }

        let (mut payload, rest) = buf.split_at(header.payload_length);
        *buf = rest;

        if !header.list {
            return Ok(Self::Bytes(Bytes::copy_from_slice(payload)));
        }

        let mut items = Vec::new();
        while !payload.is_empty() {
            items.push(Self::decode(&mut payload)?);
        }
        Ok(Self::List(items))
    }
}

/// Decodes `buf` as exactly one [RlpItem], failing if any bytes are left over.
pub fn decode_exact(mut buf: &[u8]) -> alloy_rlp::Result<RlpItem> {
    let item = RlpItem::decode(&mut buf)?;
    if !buf.is_empty() {
        return Err(alloy_rlp::Error::UnexpectedLength);
    }
    Ok(item)
}
