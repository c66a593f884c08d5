use super::Alphabet;
use crate::validate;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    EmptyInput,
    InvalidInput { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty input"),
            Self::InvalidInput { character, index } => write!(f, "Invalid decimal character {:?} at index {}", character, index),
        }
    }
}

impl From<validate::DecimalError> for Error {
    fn from(error: validate::DecimalError) -> Self {
        match error {
            validate::DecimalError::Empty => Error::EmptyInput,
            validate::DecimalError::NonDecimalCharacter { character, index } => Error::InvalidInput { character, index },
        }
    }
}

/// Positional encoder over an alphabet of `N` symbols. Output is most-significant digit first and never empty.
pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>) -> Self {
        Self { alphabet }
    }

    pub fn encode_integer(&self, value: &BigUint) -> String {
        let base = BigUint::from(N);
        let mut output = Vec::new();
        let mut remaining = value.clone();
        // Zero still produces one digit.
        loop {
            let (quotient, digit) = remaining.div_rem(&base);
            debug_assert!(digit < base);
            output.push(self.alphabet.encode(digit.to_usize().unwrap_or_default()));
            remaining = quotient;
            if remaining.is_zero() {
                break;
            }
        }
        output.reverse();
        unsafe { String::from_utf8_unchecked(output) }
    }

    /// Encodes `input` read as a big-endian unsigned integer. Leading zero bytes do not change the output.
    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        self.encode_integer(&BigUint::from_bytes_be(input.as_ref()))
    }

    /// Encodes base-10 text. Fails with [`Error::EmptyInput`] on an empty string and with
    /// [`Error::InvalidInput`] on the first character that is not an ASCII digit.
    pub fn encode_decimal(&self, input: impl AsRef<str>) -> Result<String, Error> {
        let input = input.as_ref();
        validate::decimal(input)?;
        // Non-empty ASCII digits always parse.
        let value = BigUint::parse_bytes(input.as_bytes(), 10).unwrap();
        Ok(self.encode_integer(&value))
    }
}
