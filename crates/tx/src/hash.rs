//! Transaction hashing.

use crate::{serialize_transaction, Block, BlockTransactions, Transaction, TxResult};
use alloc::{string::String, vec::Vec};
use alloy_primitives::{hex, keccak256, B256};
use tracing::{debug, warn};

/// Computes the Keccak-256 hash of the serialized `tx`.
pub fn transaction_hash(tx: &Transaction) -> TxResult<B256> {
    serialize_transaction(tx).map(keccak256)
}

/// Computes the hash of `tx`, rendered as a lowercase `0x`-prefixed string of 64 hex digits.
pub fn calculate_transaction_hash(tx: &Transaction) -> TxResult<String> {
    transaction_hash(tx).map(hex::encode_prefixed)
}

/// Computes the hash of every transaction in `txs`. The `i`th hash belongs to the `i`th
/// transaction. Stops at the first failure.
pub fn calculate_transaction_hashes(txs: &[Transaction]) -> TxResult<Vec<String>> {
    debug!(target: "tx_hash", "Hashing {} transactions", txs.len());
    txs.iter().map(calculate_transaction_hash).collect()
}

/// Computes the hash of every transaction in `block`.
///
/// A block fetched without full transaction bodies only carries hashes; nothing can be
/// recomputed from it, so the result is empty and a warning is logged. Callers that need to tell
/// this apart from a block with no transactions should inspect [Block::transactions].
pub fn calculate_block_transaction_hashes(block: &Block) -> TxResult<Vec<String>> {
    match &block.transactions {
        BlockTransactions::Full(txs) => calculate_transaction_hashes(txs),
        BlockTransactions::Hashes(hashes) => {
            warn!(
                target: "tx_hash",
                block = block.number.as_deref().unwrap_or("unknown"),
                "Block carries {} transaction hashes but no transaction bodies; nothing to hash",
                hashes.len()
            );
            Ok(Vec::new())
        }
    }
}

impl Transaction {
    /// Computes the Keccak-256 hash of the transaction. See [transaction_hash].
    pub fn hash(&self) -> TxResult<B256> {
        transaction_hash(self)
    }
}
