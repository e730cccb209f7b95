/// Standard base64 alphabet (RFC 4648 §4).
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (RFC 4648 §5), `-` and `_` in place of `+` and `/`.
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: u8 = b'=';

/// Marker for bytes that are not part of an alphabet in a reverse lookup table.
pub(crate) const INVALID: u8 = 0xFF;
