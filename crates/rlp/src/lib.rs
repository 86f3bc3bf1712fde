#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod errors;
pub use errors::{EncodeError, EncodeResult, NormalizeError, NormalizeResult};

mod item;
pub use item::{encode, RlpItem};

mod limits;
pub use limits::{EncodeLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};

mod normalize;
pub use normalize::{normalize_data, normalize_quantity, HexField};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
