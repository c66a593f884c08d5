use crate::digest;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{error, fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidLength { length: usize, expected: usize },
    TooFewCharacters { length: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidLength { length, expected } => write!(f, "Alphabet has {} characters ({} expected)", length, expected),
            Self::TooFewCharacters { length } => write!(f, "Alphabet has {} characters (at least 2 expected)", length),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// An ordered set of `N` distinct ASCII symbols. The symbol at position `i` is the digit of value `i`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        if N < 2 {
            return Err(Error::TooFewCharacters { length: N });
        }

        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Permutes this alphabet with a secret key.
    ///
    /// Each symbol is paired with the hex character at the same position of the key digest, and the pairs are
    /// stably sorted by that character. The same key always yields the same permutation; it is an obfuscation,
    /// not an encryption.
    pub fn derive(&self, key: impl AsRef<[u8]>) -> Self {
        let sort_keys = digest::hex_digest(key.as_ref(), N);
        let mut pairs: Vec<(u8, u8)> = sort_keys.bytes().zip(self.encode.iter().copied()).collect();
        pairs.sort_by_key(|&(sort_key, _)| sort_key);

        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];
        for (value, (_, character)) in pairs.into_iter().enumerate() {
            encode[value] = character;
            decode[character as usize] = Some(value as u8);
        }

        Self { encode, decode }
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.encode
    }

    pub fn as_str(&self) -> &str {
        unsafe { std::str::from_utf8_unchecked(&self.encode) }
    }
}

impl<const N: usize> FromStr for Alphabet<N> {
    type Err = Error;

    fn from_str(characters: &str) -> Result<Self, Self::Err> {
        let characters: &[u8; N] = characters.as_bytes().try_into().map_err(|_| Error::InvalidLength {
            length: characters.len(),
            expected: N,
        })?;
        Self::new(characters)
    }
}

impl<const N: usize> fmt::Display for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> Serialize for Alphabet<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Alphabet<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let characters = String::deserialize(deserializer)?;
        characters.parse().map_err(de::Error::custom)
    }
}
