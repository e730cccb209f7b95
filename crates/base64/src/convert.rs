//! Conversions between standard and URL-safe base64 text.
//!
//! Useful when the bytes were encoded by some other standard-alphabet encoder
//! (a platform primitive, for instance) and only the text needs adjusting.

use crate::constants::PAD;

/// Rewrites standard base64 text as unpadded base64url.
///
/// ```
/// use olumi_base64::standard_to_url;
///
/// assert_eq!(standard_to_url("++//8w=="), "--__8w");
/// ```
pub fn standard_to_url(encoded: &str) -> String {
    encoded
        .trim_end_matches(char::from(PAD))
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// Rewrites base64url text as standard base64, restoring `=` padding until
/// the length is a multiple of 4.
///
/// No validation happens here; malformed text stays malformed.
///
/// ```
/// use olumi_base64::url_to_standard;
///
/// assert_eq!(url_to_standard("--__8w"), "++//8w==");
/// assert_eq!(url_to_standard("Zm8"), "Zm8=");
/// ```
pub fn url_to_standard(encoded: &str) -> String {
    let mut out: String = encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while out.len() % 4 != 0 {
        out.push(char::from(PAD));
    }
    out
}
