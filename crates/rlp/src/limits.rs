//! Contains the [EncodeLimits] configuration.

/// The default maximum list nesting depth accepted by [RlpItem::encode_checked].
///
/// [RlpItem::encode_checked]: crate::RlpItem::encode_checked
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// The default maximum encoded length, in bytes, accepted by [RlpItem::encode_checked].
///
/// [RlpItem::encode_checked]: crate::RlpItem::encode_checked
pub const DEFAULT_MAX_LENGTH: usize = 32 * 1024 * 1024;

/// Bounds applied before an [RlpItem] is encoded.
///
/// [RlpItem]: crate::RlpItem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeLimits {
    /// The deepest list nesting allowed. A bare byte string has depth 0.
    pub max_depth: usize,
    /// The longest encoding allowed, in bytes, including all prefixes.
    pub max_length: usize,
}

impl EncodeLimits {
    /// Create a new [EncodeLimits] with the given bounds.
    pub const fn new(max_depth: usize, max_length: usize) -> Self {
        Self { max_depth, max_length }
    }

    /// Returns a copy of `self` with `max_depth` replaced.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy of `self` with `max_length` replaced.
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Default for EncodeLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH)
    }
}
