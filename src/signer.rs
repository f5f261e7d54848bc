//! URL signing
//!
//! Provides:
//! - HMAC-SHA256 signatures over a salted path
//! - Digest truncation to a configurable size
//! - Constant-time signature verification
//!
//! The signature is computed as:
//! ```text
//! signature = base64url(truncate(HMAC-SHA256(key, salt + path), size))
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::codec::{decode_hex, encode_base64_url};
use crate::constants::{DEFAULT_SIGNATURE_SIZE, MAX_SIGNATURE_SIZE};
use crate::error::UrlError;

type HmacSha256 = Hmac<Sha256>;

/// Decoded signing material
///
/// Decoding and size validation happen once in [`SigningKey::from_hex`];
/// signing afterwards cannot fail.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    key: Vec<u8>,
    salt: Vec<u8>,
    size: usize,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("key", &"<redacted>")
            .field("salt", &"<redacted>")
            .field("size", &self.size)
            .finish()
    }
}

impl SigningKey {
    /// Create signing material from hex-encoded key and salt
    ///
    /// # Errors
    /// * `UrlError::InvalidEncoding` if key or salt is not valid hex
    /// * `UrlError::InvalidSignatureSize` if `size` is 0 or exceeds 32
    pub fn from_hex(key: &str, salt: &str, size: usize) -> Result<Self, UrlError> {
        let key = decode_hex("key", key)?;
        let salt = decode_hex("salt", salt)?;
        Self::new(key, salt, size)
    }

    /// Create signing material from raw bytes
    pub fn new(
        key: impl Into<Vec<u8>>,
        salt: impl Into<Vec<u8>>,
        size: usize,
    ) -> Result<Self, UrlError> {
        if size == 0 || size > MAX_SIGNATURE_SIZE {
            return Err(UrlError::InvalidSignatureSize {
                size,
                max: MAX_SIGNATURE_SIZE,
            });
        }

        Ok(Self {
            key: key.into(),
            salt: salt.into(),
            size,
        })
    }

    /// Number of digest bytes kept in each signature
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sign a path, returning the base64url-encoded truncated digest
    pub fn sign(&self, path: &str) -> String {
        let digest = compute_hmac_signature(&self.key, &self.salt, path);
        tracing::trace!(size = self.size, path_len = path.len(), "Signed path");
        encode_base64_url(&digest[..self.size])
    }

    /// Check a signature against a path
    pub fn verify(&self, signature: &str, path: &str) -> bool {
        constant_time_compare(signature, &self.sign(path))
    }
}

/// Sign a path with hex-encoded key and salt
///
/// # Arguments
/// * `path` - The assembled path (modifiers and locator)
/// * `key` - Hex-encoded HMAC key
/// * `salt` - Hex-encoded salt prepended to the path
/// * `size` - Number of digest bytes to keep (1-32)
pub fn sign(path: &str, key: &str, salt: &str, size: usize) -> Result<String, UrlError> {
    Ok(SigningKey::from_hex(key, salt, size)?.sign(path))
}

/// Sign a path using the default signature size
pub fn sign_default(path: &str, key: &str, salt: &str) -> Result<String, UrlError> {
    sign(path, key, salt, DEFAULT_SIGNATURE_SIZE)
}

/// Compute HMAC-SHA256 over `salt ++ path`
fn compute_hmac_signature(key: &[u8], salt: &[u8], path: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");

    mac.update(salt);
    mac.update(path.as_bytes());

    mac.finalize().into_bytes().to_vec()
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
