pub mod codec;
pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<62> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use codec::Codec;
pub use decode::{decode_to_bytes, decode_to_decimal, decode_to_integer, Decoder};
pub use encode::{encode_bytes, encode_decimal, encode_integer, Encoder};

/// The default alphabet permuted by `key`.
pub fn derive_alphabet(key: impl AsRef<[u8]>) -> Alphabet<62> {
    ALPHABET.derive(key)
}
