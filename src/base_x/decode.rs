use super::Alphabet;
use crate::{base_common::alphabet, validate};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::InvalidCharacter {
                character: character as char,
                index,
            },
        }
    }
}

impl From<validate::NonPrintableCharacter> for Error {
    fn from(error: validate::NonPrintableCharacter) -> Self {
        Error::InvalidCharacter {
            character: error.character,
            index: error.index,
        }
    }
}

/// Inverse of [`super::Encoder`]. Every character is checked before any arithmetic, so a failed decode yields
/// nothing. The empty string decodes to zero.
pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>) -> Self {
        Self { alphabet }
    }

    fn digits(&self, input: &str) -> Result<Vec<u8>, Error> {
        validate::printable_ascii(input)?;
        input
            .bytes()
            .enumerate()
            .map(|(index, character)| self.alphabet.decode(character, index).map_err(Error::from))
            .collect()
    }

    pub fn decode_to_integer(&self, input: impl AsRef<str>) -> Result<BigUint, Error> {
        let digits = self.digits(input.as_ref())?;
        let base = BigUint::from(N);
        let mut weight = BigUint::one();
        let mut value = BigUint::zero();
        for &digit in digits.iter().rev() {
            value += BigUint::from(digit) * &weight;
            weight *= &base;
        }
        Ok(value)
    }

    pub fn decode_to_decimal(&self, input: impl AsRef<str>) -> Result<String, Error> {
        Ok(self.decode_to_integer(input)?.to_string())
    }

    /// Minimal big-endian bytes of the decoded value; zero gives an empty buffer.
    pub fn decode_to_bytes(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let value = self.decode_to_integer(input)?;
        if value.is_zero() {
            Ok(Vec::new())
        } else {
            Ok(value.to_bytes_be())
        }
    }
}
