use super::{Alphabet, ALPHABET};
pub use crate::base_x::encode::Error;
use num_bigint::BigUint;

pub struct Encoder<'a> {
    encoder: crate::base_x::Encoder<'a, 62>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<62>) -> Self {
        Self {
            encoder: crate::base_x::Encoder::new(alphabet),
        }
    }

    /// See [`crate::base_x::Encoder::encode_decimal`] for the error cases.
    pub fn encode_decimal(&self, input: impl AsRef<str>) -> Result<String, Error> {
        self.encoder.encode_decimal(input)
    }

    pub fn encode_integer(&self, value: &BigUint) -> String {
        self.encoder.encode_integer(value)
    }

    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode_bytes(input)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode_decimal(input: impl AsRef<str>) -> Result<String, Error> {
    Encoder::default().encode_decimal(input)
}

pub fn encode_integer(value: &BigUint) -> String {
    Encoder::default().encode_integer(value)
}

pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode_bytes(input)
}
