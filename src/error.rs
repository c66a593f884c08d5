use crate::{base62, base_common::alphabet, hex};
use std::{error, fmt};

#[derive(Debug, Eq, PartialEq)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

macro_rules! from_error {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Error {
                fn from(error: $source) -> Self {
                    Self::new(error.to_string())
                }
            }
        )*
    };
}

from_error!(alphabet::Error, base62::encode::Error, base62::decode::Error, hex::Error);
