//! Password hashing and verification.
//!
//! Stored form is `salt_hex$digest_hex` where the digest is SHA-256 over the
//! salt hex, a `$` separator, and the raw password bytes. The salt is 16
//! random bytes per account.

use rand::Rng;
use sha2::{Digest, Sha256};

use super::session::bytes_to_hex;

const SALT_LEN: usize = 16;

fn digest_hex(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(b"$");
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Hash a password with a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    let digest = digest_hex(&salt_hex, password);
    format!("{salt_hex}${digest}")
}

/// Verify a password against a stored `salt_hex$digest_hex` value.
///
/// Malformed stored values never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest)) = stored.split_once('$') else {
        return false;
    };
    digest_hex(salt_hex, password) == digest
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
