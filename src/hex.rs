use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid character {:?} at position {}", character, index)
            }
            Error::OddLength => write!(f, "Odd number of digits"),
        }
    }
}

const fn value(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'A'..=b'F' => Ok(character - b'A' + 10),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'0'..=b'9' => Ok(character - b'0'),
        _ => Err(Error::InvalidHexCharacter {
            character: character as char,
            index,
        }),
    }
}

/// Decodes hex text, with or without a `0x` prefix.
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let (offset, digits) = match input.strip_prefix("0x") {
        Some(digits) => (2, digits.as_bytes()),
        None => (0, input.as_bytes()),
    };
    if digits.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    digits
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, Error> { Ok(value(pair[0], offset + 2 * i)? << 4 | value(pair[1], offset + 2 * i + 1)?) })
        .collect()
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}
