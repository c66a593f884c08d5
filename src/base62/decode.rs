use super::{Alphabet, ALPHABET};
pub use crate::base_x::decode::Error;
use num_bigint::BigUint;

pub struct Decoder<'a> {
    decoder: crate::base_x::Decoder<'a, 62>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<62>) -> Self {
        Self {
            decoder: crate::base_x::Decoder::new(alphabet),
        }
    }

    pub fn decode_to_decimal(&self, input: impl AsRef<str>) -> Result<String, Error> {
        self.decoder.decode_to_decimal(input)
    }

    pub fn decode_to_integer(&self, input: impl AsRef<str>) -> Result<BigUint, Error> {
        self.decoder.decode_to_integer(input)
    }

    pub fn decode_to_bytes(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        self.decoder.decode_to_bytes(input)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode_to_decimal(input: impl AsRef<str>) -> Result<String, Error> {
    Decoder::default().decode_to_decimal(input)
}

pub fn decode_to_integer(input: impl AsRef<str>) -> Result<BigUint, Error> {
    Decoder::default().decode_to_integer(input)
}

pub fn decode_to_bytes(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode_to_bytes(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::base62::{encode_bytes, encode_decimal, encode_integer};
    use num_bigint::BigUint;

    #[test]
    fn decode_to_decimal() {
        assert_eq!(super::decode_to_decimal("0"), Ok("0".to_string()));
        assert_eq!(super::decode_to_decimal("z"), Ok("61".to_string()));
        assert_eq!(super::decode_to_decimal("10"), Ok("62".to_string()));
        assert_eq!(super::decode_to_decimal("100"), Ok("3844".to_string()));
        assert_eq!(super::decode_to_decimal("3D7"), Ok("12345".to_string()));
        assert_eq!(super::decode_to_decimal("0003D7"), Ok("12345".to_string()));
        assert_eq!(super::decode_to_decimal(""), Ok("0".to_string()));
        assert_eq!(
            super::decode_to_decimal("2aYls9bkamJJSwhr0"),
            Ok("123456789012345678901234567890".to_string())
        );
    }

    #[test]
    fn decode_rejects_invalid_characters() {
        assert_eq!(
            super::decode_to_decimal("!!!invalid!!!"),
            Err(Error::InvalidCharacter { character: '!', index: 0 })
        );
        assert_eq!(super::decode_to_decimal("abc-def"), Err(Error::InvalidCharacter { character: '-', index: 3 }));
        assert_eq!(super::decode_to_integer("ab cd"), Err(Error::InvalidCharacter { character: ' ', index: 2 }));
        assert_eq!(super::decode_to_integer("é1"), Err(Error::InvalidCharacter { character: 'é', index: 0 }));
        assert_eq!(super::decode_to_bytes("47\n"), Err(Error::InvalidCharacter { character: '\n', index: 2 }));
    }

    #[test]
    fn decode_to_bytes() {
        assert_eq!(super::decode_to_bytes("47"), Ok(vec![0xff]));
        assert_eq!(super::decode_to_bytes("44pZgF"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(super::decode_to_bytes("1wJfrzvdbtXUOlUjUf"), Ok(b"Hello, World!".to_vec()));
        assert_eq!(super::decode_to_bytes("0"), Ok(vec![]));
    }

    #[test]
    fn bytes_lose_leading_zeros() {
        assert_eq!(super::decode_to_bytes(encode_bytes([0x00, 0x00, 0xff])), Ok(vec![0xff]));
    }

    #[test]
    fn decimal_round_trip() {
        for input in ["0", "1", "61", "62", "999999999999", "18446744073709551616", "123456789012345678901234567890"] {
            assert_eq!(super::decode_to_decimal(encode_decimal(input).unwrap()), Ok(input.to_string()));
        }
    }

    #[test]
    fn integer_round_trip() {
        let mut value = BigUint::from(1u32);
        for _ in 0..40 {
            value = value * 7919u32 + 13u32;
            assert_eq!(super::decode_to_integer(encode_integer(&value)), Ok(value.clone()));
        }
    }
}
