//! Standard base64 decoding function.

use crate::STANDARD;

/// Decodes a standard base64 string to bytes.
///
/// # Example
///
/// ```
/// use olumi_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    STANDARD.decode(encoded)
}
