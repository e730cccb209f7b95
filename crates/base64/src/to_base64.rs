//! Standard base64 encoding function.

use crate::STANDARD;

/// Encodes bytes as padded standard base64.
///
/// # Example
///
/// ```
/// use olumi_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
