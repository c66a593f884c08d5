use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecimalError {
    Empty,
    NonDecimalCharacter { character: char, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NonPrintableCharacter {
    pub character: char,
    pub index: usize,
}

impl error::Error for DecimalError {}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty input"),
            Self::NonDecimalCharacter { character, index } => write!(f, "Non-decimal character {:?} at index {}", character, index),
        }
    }
}

impl error::Error for NonPrintableCharacter {}

impl fmt::Display for NonPrintableCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Non-printable character {:?} at index {}", self.character, self.index)
    }
}

/// Checks that `input` is a non-empty run of ASCII decimal digits.
pub fn decimal(input: &str) -> Result<(), DecimalError> {
    if input.is_empty() {
        return Err(DecimalError::Empty);
    }
    match input.chars().enumerate().find(|(_, character)| !character.is_ascii_digit()) {
        Some((index, character)) => Err(DecimalError::NonDecimalCharacter { character, index }),
        None => Ok(()),
    }
}

/// Checks that every character of `input` is printable ASCII (space through tilde).
pub fn printable_ascii(input: &str) -> Result<(), NonPrintableCharacter> {
    match input.chars().enumerate().find(|(_, character)| !matches!(*character, ' '..='~')) {
        Some((index, character)) => Err(NonPrintableCharacter { character, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{DecimalError, NonPrintableCharacter};

    #[test]
    fn decimal() {
        assert_eq!(super::decimal("0"), Ok(()));
        assert_eq!(super::decimal("123456789012345678901234567890"), Ok(()));
        assert_eq!(super::decimal(""), Err(DecimalError::Empty));
        assert_eq!(
            super::decimal("http://example.com"),
            Err(DecimalError::NonDecimalCharacter { character: 'h', index: 0 })
        );
        assert_eq!(super::decimal("12_3"), Err(DecimalError::NonDecimalCharacter { character: '_', index: 2 }));
        assert_eq!(super::decimal("-1"), Err(DecimalError::NonDecimalCharacter { character: '-', index: 0 }));
        assert_eq!(super::decimal("1٣"), Err(DecimalError::NonDecimalCharacter { character: '٣', index: 1 }));
    }

    #[test]
    fn printable_ascii() {
        assert_eq!(super::printable_ascii(""), Ok(()));
        assert_eq!(super::printable_ascii("3D7"), Ok(()));
        assert_eq!(super::printable_ascii("!!!invalid!!!"), Ok(()));
        assert_eq!(super::printable_ascii("ab\tc"), Err(NonPrintableCharacter { character: '\t', index: 2 }));
        assert_eq!(super::printable_ascii("é1"), Err(NonPrintableCharacter { character: 'é', index: 0 }));
    }
}
