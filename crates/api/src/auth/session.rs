//! Session token generation and digests
//!
//! Tokens are opaque random strings handed to the client once. The session
//! table keys on the SHA-256 digest of the token, so a process memory dump
//! does not yield usable bearer tokens.

use sha2::{Digest, Sha256};

/// Generate a secure random session token
///
/// Returns a 32-byte hex-encoded token (64 characters)
pub fn generate_token() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    hex::encode(bytes)
}

/// Hash a token using SHA-256
pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
