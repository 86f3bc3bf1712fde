//! Contains the [Transaction] type and its per-format field sets.
//!
//! Every field is kept exactly as the JSON-RPC endpoint rendered it: a `0x`-prefixed hex string.
//! Conversion to bytes happens once, at serialization time.

use crate::TxType;
use alloc::{string::String, vec::Vec};
use serde::{de::Error as _, Deserialize, Deserializer};

/// An entry of an EIP-2930 access list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    /// The 20 byte address being accessed.
    pub address: String,
    /// The 32 byte storage keys accessed at `address`.
    pub storage_keys: Vec<String>,
}

/// A legacy transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxLegacy {
    /// The sender's nonce.
    pub nonce: String,
    /// The gas price, in wei.
    pub gas_price: String,
    /// The gas limit.
    #[serde(rename = "gas", alias = "gasLimit")]
    pub gas_limit: String,
    /// The recipient, or [None] for contract creation.
    #[serde(default)]
    pub to: Option<String>,
    /// The transferred value, in wei.
    pub value: String,
    /// The calldata or init code.
    #[serde(alias = "data")]
    pub input: String,
    /// The signature `v` value, including the EIP-155 chain ID offset where present.
    pub v: String,
    /// The signature `r` value.
    pub r: String,
    /// The signature `s` value.
    pub s: String,
}

/// An EIP-2930 access list transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxAccessList {
    /// The chain ID.
    pub chain_id: String,
    /// The sender's nonce.
    pub nonce: String,
    /// The gas price, in wei.
    pub gas_price: String,
    /// The gas limit.
    #[serde(rename = "gas", alias = "gasLimit")]
    pub gas_limit: String,
    /// The recipient, or [None] for contract creation.
    #[serde(default)]
    pub to: Option<String>,
    /// The transferred value, in wei.
    pub value: String,
    /// The calldata or init code.
    #[serde(alias = "data")]
    pub input: String,
    /// The addresses and storage keys the transaction pre-declares.
    #[serde(default)]
    pub access_list: Vec<AccessListItem>,
    /// The signature y-parity.
    pub v: String,
    /// The signature `r` value.
    pub r: String,
    /// The signature `s` value.
    pub s: String,
}

/// An EIP-1559 dynamic fee transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxDynamicFee {
    /// The chain ID.
    pub chain_id: String,
    /// The sender's nonce.
    pub nonce: String,
    /// The priority fee paid to the block producer, in wei per gas.
    pub max_priority_fee_per_gas: String,
    /// The maximum total fee, in wei per gas.
    pub max_fee_per_gas: String,
    /// The gas limit.
    #[serde(rename = "gas", alias = "gasLimit")]
    pub gas_limit: String,
    /// The recipient, or [None] for contract creation.
    #[serde(default)]
    pub to: Option<String>,
    /// The transferred value, in wei.
    pub value: String,
    /// The calldata or init code.
    #[serde(alias = "data")]
    pub input: String,
    /// The addresses and storage keys the transaction pre-declares.
    #[serde(default)]
    pub access_list: Vec<AccessListItem>,
    /// The signature y-parity.
    pub v: String,
    /// The signature `r` value.
    pub r: String,
    /// The signature `s` value.
    pub s: String,
}

/// A signed transaction in one of the supported wire formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transaction {
    /// A legacy transaction.
    Legacy(TxLegacy),
    /// An EIP-2930 access list transaction.
    AccessList(TxAccessList),
    /// An EIP-1559 dynamic fee transaction.
    DynamicFee(TxDynamicFee),
}

impl Transaction {
    /// Returns the wire format of the transaction.
    pub const fn tx_type(&self) -> TxType {
        match self {
            Self::Legacy(_) => TxType::Legacy,
            Self::AccessList(_) => TxType::AccessList,
            Self::DynamicFee(_) => TxType::DynamicFee,
        }
    }

    /// Returns the chain ID, if the format carries one.
    pub fn chain_id(&self) -> Option<&str> {
        match self {
            Self::Legacy(_) => None,
            Self::AccessList(tx) => Some(&tx.chain_id),
            Self::DynamicFee(tx) => Some(&tx.chain_id),
        }
    }

    /// Returns the recipient, or [None] for contract creation.
    pub fn to(&self) -> Option<&str> {
        let to = match self {
            Self::Legacy(tx) => tx.to.as_deref(),
            Self::AccessList(tx) => tx.to.as_deref(),
            Self::DynamicFee(tx) => tx.to.as_deref(),
        };
        to.filter(|to| *to != "0x")
    }

    /// Returns `true` if the transaction deploys a contract.
    pub fn is_create(&self) -> bool {
        self.to().is_none()
    }
}

impl From<TxLegacy> for Transaction {
    fn from(tx: TxLegacy) -> Self {
        Self::Legacy(tx)
    }
}

impl From<TxAccessList> for Transaction {
    fn from(tx: TxAccessList) -> Self {
        Self::AccessList(tx)
    }
}

impl From<TxDynamicFee> for Transaction {
    fn from(tx: TxDynamicFee) -> Self {
        Self::DynamicFee(tx)
    }
}

/// The union of all transaction fields as returned by `eth_getBlockByNumber`. Which of them are
/// required depends on the `type` discriminant.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcTransaction {
    #[serde(rename = "type", default)]
    tx_type: Option<String>,
    chain_id: Option<String>,
    nonce: Option<String>,
    gas_price: Option<String>,
    max_priority_fee_per_gas: Option<String>,
    max_fee_per_gas: Option<String>,
    #[serde(rename = "gas", alias = "gasLimit")]
    gas_limit: Option<String>,
    #[serde(default)]
    to: Option<String>,
    value: Option<String>,
    #[serde(alias = "data")]
    input: Option<String>,
    #[serde(default)]
    access_list: Vec<AccessListItem>,
    v: Option<String>,
    y_parity: Option<String>,
    r: Option<String>,
    s: Option<String>,
}

/// Unwraps a field the selected layout needs, or reports it as missing.
fn required<E: serde::de::Error>(field: Option<String>, name: &'static str) -> Result<String, E> {
    field.ok_or_else(|| E::missing_field(name))
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RpcTransaction::deserialize(deserializer)?;
        let tx_type = TxType::from_discriminant(raw.tx_type.as_deref()).map_err(D::Error::custom)?;

        let tx = match tx_type {
            TxType::Legacy => Self::Legacy(TxLegacy {
                nonce: required(raw.nonce, "nonce")?,
                gas_price: required(raw.gas_price, "gasPrice")?,
                gas_limit: required(raw.gas_limit, "gas")?,
                to: raw.to,
                value: required(raw.value, "value")?,
                input: required(raw.input, "input")?,
                v: required(raw.v, "v")?,
                r: required(raw.r, "r")?,
                s: required(raw.s, "s")?,
            }),
            TxType::AccessList => Self::AccessList(TxAccessList {
                chain_id: required(raw.chain_id, "chainId")?,
                nonce: required(raw.nonce, "nonce")?,
                gas_price: required(raw.gas_price, "gasPrice")?,
                gas_limit: required(raw.gas_limit, "gas")?,
                to: raw.to,
                value: required(raw.value, "value")?,
                input: required(raw.input, "input")?,
                access_list: raw.access_list,
                v: required(raw.v.or(raw.y_parity), "v")?,
                r: required(raw.r, "r")?,
                s: required(raw.s, "s")?,
            }),
            TxType::DynamicFee => Self::DynamicFee(TxDynamicFee {
                chain_id: required(raw.chain_id, "chainId")?,
                nonce: required(raw.nonce, "nonce")?,
                max_priority_fee_per_gas: required(
                    raw.max_priority_fee_per_gas,
                    "maxPriorityFeePerGas",
                )?,
                max_fee_per_gas: required(raw.max_fee_per_gas, "maxFeePerGas")?,
                gas_limit: required(raw.gas_limit, "gas")?,
                to: raw.to,
                value: required(raw.value, "value")?,
                input: required(raw.input, "input")?,
                access_list: raw.access_list,
                v: required(raw.v.or(raw.y_parity), "v")?,
                r: required(raw.r, "r")?,
                s: required(raw.s, "s")?,
            }),
        };
        Ok(tx)
    }
}
