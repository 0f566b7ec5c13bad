//! Numeric representations used on Starknet: field elements parsed from
//! user supplied strings and 256-bit integers split into two 128-bit limbs.
pub mod conversions;
pub mod serialization;
pub mod uint256;

pub use {
    conversions::{FeltEncoding, felt_from_short_string, felt_from_str, felt_to_dec_string},
    uint256::Uint256,
};

/// A value could not be converted into the expected numeric representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("empty numeric string")]
    Empty,
    #[error("{0:?} is not an unsigned decimal or 0x-prefixed hex integer")]
    Invalid(String),
    #[error("{0:?} is not smaller than the field prime")]
    OutOfFieldRange(String),
    #[error("{0:?} does not fit into 256 bits")]
    OutOfU256Range(String),
    #[error("{input:?} is not a valid cairo short string: {reason}")]
    ShortString { input: String, reason: String },
    #[error("unknown felt encoding {0:?}, expected `numeric` or `short-string`")]
    UnknownEncoding(String),
}
