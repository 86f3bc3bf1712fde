#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod constants;

mod errors;
pub use errors::{TxError, TxResult};

mod tx_type;
pub use tx_type::TxType;

mod transaction;
pub use transaction::{AccessListItem, Transaction, TxAccessList, TxDynamicFee, TxLegacy};

mod block;
pub use block::{Block, BlockTransactions};

pub use txcodec_rlp::EncodeLimits;

mod serialize;
pub use serialize::{
    serialize_transaction, serialize_transaction_with_limits, serialize_transactions,
};

mod hash;
pub use hash::{
    calculate_block_transaction_hashes, calculate_transaction_hash, calculate_transaction_hashes,
    transaction_hash,
};

#[cfg(test)]
mod test_util;
