//! Constants for the `txcodec-tx` crate.

/// The EIP-2718 type identifier of a legacy transaction. Legacy transactions carry no type byte.
pub const LEGACY_TX_TYPE_ID: u8 = 0x00;

/// The EIP-2718 type identifier of an EIP-2930 access list transaction.
pub const ACCESS_LIST_TX_TYPE_ID: u8 = 0x01;

/// The EIP-2718 type identifier of an EIP-1559 dynamic fee transaction.
pub const DYNAMIC_FEE_TX_TYPE_ID: u8 = 0x02;

/// The length of a rendered transaction hash: `0x` followed by 64 hex digits.
pub const TX_HASH_HEX_LENGTH: usize = 66;
