use crate::hex;
use sha2::{Digest, Sha256, Sha512};

pub fn sha256_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(input.as_ref()))
}

pub fn sha512_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(Sha512::digest(input.as_ref()))
}

/// Lowercase hex digest of `input` with at least `len` characters when possible: SHA-256, or SHA-512 when the
/// 64 characters of SHA-256 are not enough.
pub fn hex_digest(input: &[u8], len: usize) -> String {
    let digest = sha256_hex(input);
    if digest.len() >= len {
        digest
    } else {
        sha512_hex(input)
    }
}
