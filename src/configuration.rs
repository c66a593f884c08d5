use crate::{
    base62::{Alphabet, Codec, ALPHABET},
    Error,
};
use std::{env, fmt};

#[derive(Debug, Clone)]
pub struct Configuration {
    key: Option<String>,
    alphabet: Alphabet<62>,
    verbose: bool,
}

fn var_map<T, E: fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: T,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {} ({})", key, value, error))),
        None => Ok(default),
    }
}

impl Configuration {
    /// Reads `BASEX_KEY`, `BASEX_ALPHABET` and `BASEX_VERBOSE` from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let key = lookup("BASEX_KEY");
        let alphabet = var_map(&lookup, "BASEX_ALPHABET", |alphabet| alphabet.parse(), ALPHABET)?;
        let verbose = var_map(&lookup, "BASEX_VERBOSE", |verbose| verbose.parse(), false)?;
        Ok(Self { key, alphabet, verbose })
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn alphabet(&self) -> &Alphabet<62> {
        &self.alphabet
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Codec over the configured alphabet, permuted by the key when one is set.
    pub fn codec(&self) -> Codec {
        match &self.key {
            Some(key) => Codec::new(self.alphabet.derive(key)),
            None => Codec::new(self.alphabet.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use crate::base62::{Codec, ALPHABET};
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, crate::Error> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.key(), None);
        assert_eq!(configuration.alphabet(), &ALPHABET);
        assert!(!configuration.verbose());
        assert_eq!(configuration.codec(), Codec::default());
    }

    #[test]
    fn key() {
        let configuration = configuration(&[("BASEX_KEY", "secret"), ("BASEX_VERBOSE", "true")]).unwrap();
        assert_eq!(configuration.key(), Some("secret"));
        assert!(configuration.verbose());
        assert_eq!(configuration.codec(), Codec::with_key("secret"));
    }

    #[test]
    fn alphabet() {
        let reversed: String = ALPHABET.as_str().chars().rev().collect();
        let configuration = configuration(&[("BASEX_ALPHABET", reversed.as_str())]).unwrap();
        assert_eq!(configuration.codec().encode_decimal("61"), Ok("0".to_string()));
        assert_eq!(configuration.codec().encode_decimal("62"), Ok("yz".to_string()));
    }

    #[test]
    fn invalid() {
        assert_eq!(
            configuration(&[("BASEX_VERBOSE", "yes")]).unwrap_err().message(),
            "Invalid BASEX_VERBOSE yes (provided string was not `true` or `false`)"
        );
        assert_eq!(
            configuration(&[("BASEX_ALPHABET", "abc")]).unwrap_err().message(),
            "Invalid BASEX_ALPHABET abc (Alphabet has 3 characters (62 expected))"
        );
    }
}
