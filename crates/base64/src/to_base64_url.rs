//! URL-safe base64 encoding function.

use crate::URL_SAFE;

/// Encodes bytes as URL-safe base64 with no padding.
///
/// The output only contains `[A-Za-z0-9_-]`, so it can be dropped into a query
/// string or fragment without percent-encoding.
///
/// # Example
///
/// ```
/// use olumi_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world"), "aGVsbG8gd29ybGQ");
/// assert_eq!(to_base64_url(&[0xfb, 0xff]), "-_8");
/// ```
pub fn to_base64_url(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}
