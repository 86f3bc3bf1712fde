//! Serialization of [Transaction]s into their canonical EIP-2718 envelopes.

use crate::{AccessListItem, Transaction, TxError, TxResult};
use alloc::{vec, vec::Vec};
use alloy_primitives::Bytes;
use tracing::trace;
use txcodec_rlp::{EncodeLimits, HexField, RlpItem};

/// Serializes `tx` into the bytes its hash commits to, bounded by the default [EncodeLimits].
///
/// Legacy transactions serialize to a bare RLP list. Typed transactions serialize to their type
/// byte followed by the RLP list.
pub fn serialize_transaction(tx: &Transaction) -> TxResult<Bytes> {
    serialize_transaction_with_limits(tx, &EncodeLimits::default())
}

/// Serializes `tx` like [serialize_transaction], bounded by `limits`.
pub fn serialize_transaction_with_limits(
    tx: &Transaction,
    limits: &EncodeLimits,
) -> TxResult<Bytes> {
    let payload = tx.rlp_item()?.encode_checked(limits)?;

    let Some(marker) = tx.tx_type().envelope_marker() else {
        return Ok(payload.into());
    };

    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(marker);
    out.extend_from_slice(&payload);
    Ok(out.into())
}

/// Serializes every transaction in `txs`, in order. Stops at the first failure.
pub fn serialize_transactions(txs: &[Transaction]) -> TxResult<Vec<Bytes>> {
    trace!(target: "tx_serialize", "Serializing {} transactions", txs.len());
    txs.iter().map(serialize_transaction).collect()
}

impl Transaction {
    /// Returns the transaction's fields in canonical order, paired with their JSON-RPC names.
    pub fn fields(&self) -> Vec<(&'static str, HexField<'_>)> {
        use HexField::{Data, Quantity};

        match self {
            Self::Legacy(tx) => vec![
                ("nonce", Quantity(&tx.nonce)),
                ("gasPrice", Quantity(&tx.gas_price)),
                ("gas", Quantity(&tx.gas_limit)),
                ("to", recipient(tx.to.as_deref())),
                ("value", Quantity(&tx.value)),
                ("input", Data(&tx.input)),
                ("v", Quantity(&tx.v)),
                ("r", Quantity(&tx.r)),
                ("s", Quantity(&tx.s)),
            ],
            Self::AccessList(tx) => vec![
                ("chainId", Quantity(&tx.chain_id)),
                ("nonce", Quantity(&tx.nonce)),
                ("gasPrice", Quantity(&tx.gas_price)),
                ("gas", Quantity(&tx.gas_limit)),
                ("to", recipient(tx.to.as_deref())),
                ("value", Quantity(&tx.value)),
                ("input", Data(&tx.input)),
                ("accessList", access_list(&tx.access_list)),
                ("v", Quantity(&tx.v)),
                ("r", Quantity(&tx.r)),
                ("s", Quantity(&tx.s)),
            ],
            Self::DynamicFee(tx) => vec![
                ("chainId", Quantity(&tx.chain_id)),
                ("nonce", Quantity(&tx.nonce)),
                ("maxPriorityFeePerGas", Quantity(&tx.max_priority_fee_per_gas)),
                ("maxFeePerGas", Quantity(&tx.max_fee_per_gas)),
                ("gas", Quantity(&tx.gas_limit)),
                ("to", recipient(tx.to.as_deref())),
                ("value", Quantity(&tx.value)),
                ("input", Data(&tx.input)),
                ("accessList", access_list(&tx.access_list)),
                ("v", Quantity(&tx.v)),
                ("r", Quantity(&tx.r)),
                ("s", Quantity(&tx.s)),
            ],
        }
    }

    /// Normalizes every field and wraps them in the transaction's RLP list.
    pub fn rlp_item(&self) -> TxResult<RlpItem> {
        self.fields()
            .into_iter()
            .map(|(field, value)| {
                value.normalize().map_err(|source| TxError::MalformedField { field, source })
            })
            .collect::<TxResult<Vec<_>>>()
            .map(RlpItem::List)
    }

    /// Serializes the transaction. See [serialize_transaction].
    pub fn serialize(&self) -> TxResult<Bytes> {
        serialize_transaction(self)
    }
}

/// Contract creation has no recipient and encodes it as the empty string.
const fn recipient(to: Option<&str>) -> HexField<'_> {
    match to {
        Some(to) => HexField::Data(to),
        None => HexField::Data("0x"),
    }
}

/// Builds the `[[address, [key, ...]], ...]` structure of an access list.
fn access_list(items: &[AccessListItem]) -> HexField<'_> {
    HexField::List(
        items
            .iter()
            .map(|item| {
                HexField::List(vec![
                    HexField::Data(&item.address),
                    HexField::List(
                        item.storage_keys.iter().map(|key| HexField::Data(key)).collect(),
                    ),
                ])
            })
            .collect(),
    )
}
