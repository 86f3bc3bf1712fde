//! This module contains the [Block] type, as returned by `eth_getBlockByNumber`.

use crate::Transaction;
use alloc::{string::String, vec::Vec};
use core::fmt;
use serde::{
    de::{value::MapAccessDeserializer, Error as _, MapAccess, Visitor},
    Deserialize, Deserializer,
};

/// The parts of a JSON-RPC block this crate reads. All other keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// The block hash.
    #[serde(default)]
    pub hash: Option<String>,
    /// The block number, as a hex quantity.
    #[serde(default)]
    pub number: Option<String>,
    /// The block's transactions, either condensed to hashes or in full.
    #[serde(default)]
    pub transactions: BlockTransactions,
}

/// The transactions of a [Block].
///
/// The form depends on the `full transactions` flag of the query that fetched the block. Only
/// the full form can be serialized and hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTransactions {
    /// Condensed form: transaction hashes only.
    Hashes(Vec<String>),
    /// Verbose form: full transaction objects.
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    /// Returns the number of transactions.
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(txs) => txs.len(),
        }
    }

    /// Returns `true` if there are no transactions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the transactions are condensed to hashes.
    pub const fn is_condensed(&self) -> bool {
        matches!(self, Self::Hashes(_))
    }

    /// Returns the full transactions, or [None] for the condensed form.
    pub fn as_full(&self) -> Option<&[Transaction]> {
        match self {
            Self::Full(txs) => Some(txs),
            Self::Hashes(_) => None,
        }
    }
}

impl Default for BlockTransactions {
    fn default() -> Self {
        Self::Full(Vec::new())
    }
}

/// A single entry of the JSON `transactions` array.
enum BlockTransactionEntry {
    Hash(String),
    Full(Transaction),
}

/// Picks the entry kind from the JSON value kind, so a malformed transaction object reports its
/// own error instead of a generic mismatch.
struct BlockTransactionEntryVisitor;

impl<'de> Visitor<'de> for BlockTransactionEntryVisitor {
    type Value = BlockTransactionEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a transaction hash or a transaction object")
    }

    fn visit_str<E: serde::de::Error>(self, hash: &str) -> Result<Self::Value, E> {
        Ok(BlockTransactionEntry::Hash(hash.into()))
    }

    fn visit_string<E: serde::de::Error>(self, hash: String) -> Result<Self::Value, E> {
        Ok(BlockTransactionEntry::Hash(hash))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Transaction::deserialize(MapAccessDeserializer::new(map)).map(BlockTransactionEntry::Full)
    }
}

impl<'de> Deserialize<'de> for BlockTransactionEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BlockTransactionEntryVisitor)
    }
}

impl<'de> Deserialize<'de> for BlockTransactions {
    /// The first entry decides the form. An empty array is an empty [BlockTransactions::Full],
    /// and an array mixing hashes with objects is rejected.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<BlockTransactionEntry>::deserialize(deserializer)?;
        let mixed = || D::Error::custom("block transactions mix hashes and full transactions");

        if matches!(entries.first(), Some(BlockTransactionEntry::Hash(_))) {
            entries
                .into_iter()
                .map(|entry| match entry {
                    BlockTransactionEntry::Hash(hash) => Ok(hash),
                    BlockTransactionEntry::Full(_) => Err(mixed()),
                })
                .collect::<Result<_, _>>()
                .map(Self::Hashes)
        } else {
            entries
                .into_iter()
                .map(|entry| match entry {
                    BlockTransactionEntry::Full(tx) => Ok(tx),
                    BlockTransactionEntry::Hash(_) => Err(mixed()),
                })
                .collect::<Result<_, _>>()
                .map(Self::Full)
        }
    }
}
