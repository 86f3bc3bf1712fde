//! Error types for the `txcodec-tx` crate.

use thiserror::Error;
use txcodec_rlp::{EncodeError, NormalizeError};

/// A [Result] alias for the [TxError] type.
pub type TxResult<T> = Result<T, TxError>;

/// An error type for serializing and hashing [Transaction]s.
///
/// [Transaction]: crate::Transaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxError {
    /// A field is not a well-formed hex string.
    #[error("Malformed transaction field `{field}`: {source}")]
    MalformedField {
        /// The JSON-RPC name of the field.
        field: &'static str,
        /// The normalization failure.
        #[source]
        source: NormalizeError,
    },
    /// The RLP structure exceeded the encode limits.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
