//! Contains the [TxType] discriminant.

use crate::constants::{ACCESS_LIST_TX_TYPE_ID, DYNAMIC_FEE_TX_TYPE_ID, LEGACY_TX_TYPE_ID};
use core::fmt;
use tracing::warn;
use txcodec_rlp::{normalize_quantity, NormalizeResult};

/// The wire format of a [Transaction].
///
/// [Transaction]: crate::Transaction
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    /// A pre-EIP-2718 transaction, encoded as a bare RLP list.
    #[default]
    Legacy,
    /// An EIP-2930 access list transaction.
    AccessList,
    /// An EIP-1559 dynamic fee transaction.
    DynamicFee,
}

impl TxType {
    /// Returns the EIP-2718 type identifier.
    pub const fn type_id(&self) -> u8 {
        match self {
            Self::Legacy => LEGACY_TX_TYPE_ID,
            Self::AccessList => ACCESS_LIST_TX_TYPE_ID,
            Self::DynamicFee => DYNAMIC_FEE_TX_TYPE_ID,
        }
    }

    /// Returns the byte prepended to the RLP payload, or [None] for legacy transactions.
    pub const fn envelope_marker(&self) -> Option<u8> {
        match self {
            Self::Legacy => None,
            _ => Some(self.type_id()),
        }
    }

    /// Resolves a JSON-RPC `type` discriminant such as `"0x2"`.
    ///
    /// A missing discriminant is a legacy transaction. A well-formed discriminant outside of
    /// `0x0..=0x2` also resolves to [TxType::Legacy] and logs a warning; the legacy field
    /// layout is then used to encode it. A discriminant that is not a hex quantity is an error.
    pub fn from_discriminant(discriminant: Option<&str>) -> NormalizeResult<Self> {
        let Some(discriminant) = discriminant else {
            return Ok(Self::Legacy);
        };

        let id = normalize_quantity(discriminant)?;
        match &id[..] {
            [] => Ok(Self::Legacy),
            [ACCESS_LIST_TX_TYPE_ID] => Ok(Self::AccessList),
            [DYNAMIC_FEE_TX_TYPE_ID] => Ok(Self::DynamicFee),
            _ => {
                warn!(
                    target: "tx_type",
                    "Unsupported transaction type {discriminant}, falling back to the legacy layout"
                );
                Ok(Self::Legacy)
            }
        }
    }
}

impl From<TxType> for u8 {
    fn from(ty: TxType) -> Self {
        ty.type_id()
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::AccessList => write!(f, "eip2930"),
            Self::DynamicFee => write!(f, "eip1559"),
        }
    }
}
