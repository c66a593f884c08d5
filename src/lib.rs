//! Compact alphanumeric identifiers for arbitrarily large integers.
//!
//! Integers (or big-endian byte buffers) are written in base 62 over `0-9A-Za-z`, most-significant digit first.
//! A secret key can permute the alphabet so the same value reads differently under different keys:
//!
//! ```
//! use basex::base62::{self, Codec};
//!
//! assert_eq!(base62::encode_decimal("12345").unwrap(), "3D7");
//! assert_eq!(base62::decode_to_decimal("3D7").unwrap(), "12345");
//!
//! let codec = Codec::with_key("secret");
//! assert_eq!(codec.encode_decimal("12345").unwrap(), "AFh");
//! ```
//!
//! The keyed permutation is obfuscation only, it offers no cryptographic protection.

pub mod base62;
pub mod base_common;
pub mod base_x;
pub mod chronometer;
pub mod configuration;
pub mod digest;
pub mod error;
pub mod hex;
pub mod logger;
pub mod validate;

pub use self::{
    base62::{derive_alphabet, Codec},
    base_common::Alphabet,
    chronometer::Chronometer,
    configuration::Configuration,
    error::Error,
    logger::Logger,
};
