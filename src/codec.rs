//! Byte encodings used in produced URLs
//!
//! - base64url without padding for locators, signatures and free-text
//!   modifier arguments
//! - hex decoding for signing keys and salts

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::error::UrlError;

/// Base64url encode (URL-safe alphabet, no padding)
pub fn encode_base64_url(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode a hex string into raw bytes
///
/// `field` names the value being decoded ("key", "salt") and is carried
/// into the error so callers can tell which input was malformed.
pub fn decode_hex(field: &str, value: &str) -> Result<Vec<u8>, UrlError> {
    hex::decode(value).map_err(|e| UrlError::invalid_encoding(field, e.to_string()))
}
