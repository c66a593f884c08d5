use super::{decode, encode, Alphabet, Decoder, Encoder, ALPHABET};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Owns an alphabet and encodes/decodes with it. A keyed codec is built once with [`Codec::with_key`] and can
/// then be shared between threads.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Codec {
    alphabet: Alphabet<62>,
}

impl Codec {
    pub const fn new(alphabet: Alphabet<62>) -> Self {
        Self { alphabet }
    }

    pub fn with_key(key: impl AsRef<[u8]>) -> Self {
        Self::new(ALPHABET.derive(key))
    }

    pub fn alphabet(&self) -> &Alphabet<62> {
        &self.alphabet
    }

    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.alphabet)
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.alphabet)
    }

    pub fn encode_decimal(&self, input: impl AsRef<str>) -> Result<String, encode::Error> {
        self.encoder().encode_decimal(input)
    }

    pub fn encode_integer(&self, value: &BigUint) -> String {
        self.encoder().encode_integer(value)
    }

    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder().encode_bytes(input)
    }

    pub fn decode_to_decimal(&self, input: impl AsRef<str>) -> Result<String, decode::Error> {
        self.decoder().decode_to_decimal(input)
    }

    pub fn decode_to_integer(&self, input: impl AsRef<str>) -> Result<BigUint, decode::Error> {
        self.decoder().decode_to_integer(input)
    }

    pub fn decode_to_bytes(&self, input: impl AsRef<str>) -> Result<Vec<u8>, decode::Error> {
        self.decoder().decode_to_bytes(input)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(ALPHABET)
    }
}
