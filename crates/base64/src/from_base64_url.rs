//! URL-safe base64 decoding function.

use crate::URL_SAFE;

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and handles missing padding automatically.
///
/// # Example
///
/// ```
/// use olumi_base64::from_base64_url;
///
/// let decoded = from_base64_url("aGVsbG8gd29ybGQ").unwrap();
/// assert_eq!(decoded, b"hello world");
/// assert!(from_base64_url("not-base64!!!").is_err());
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    URL_SAFE.decode(encoded)
}
