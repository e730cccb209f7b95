//! olumi-base64 - Base64 and base64url codecs.
//!
//! A small table-driven implementation with no dependencies, used for
//! share-link tokens in both native tooling and the browser bundle.
//!
//! - [`to_base64`] / [`from_base64`]: standard alphabet, `=` padded
//! - [`to_base64_url`] / [`from_base64_url`]: URL-safe alphabet, unpadded
//! - [`standard_to_url`] / [`url_to_standard`]: alphabet and padding rewrites
//! - [`Base64`]: the underlying codec, for custom alphabets

mod codec;
mod constants;
mod convert;
mod from_base64;
mod from_base64_url;
mod to_base64;
mod to_base64_url;

pub use codec::{Base64, STANDARD, URL_SAFE};
pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use convert::{standard_to_url, url_to_standard};
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;

/// Error type for base64 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// Alphabet is not exactly 64 characters long.
    InvalidCharSetLength,
    /// Alphabet contains non-ASCII or repeated characters, or the padding
    /// character is part of it.
    InvalidCharSet,
    /// Input byte is not part of the alphabet.
    InvalidChar { position: usize, byte: u8 },
    /// Unpadded input length leaves a single dangling character.
    InvalidLength(usize),
    /// Padding is misplaced or too long.
    InvalidPadding,
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidCharSetLength => write!(f, "alphabet must be 64 characters"),
            Base64Error::InvalidCharSet => write!(f, "alphabet must be 64 distinct ASCII characters"),
            Base64Error::InvalidChar { position, byte } => {
                write!(f, "invalid base64 byte 0x{byte:02x} at position {position}")
            }
            Base64Error::InvalidLength(len) => write!(f, "invalid base64 length {len}"),
            Base64Error::InvalidPadding => write!(f, "invalid base64 padding"),
        }
    }
}

impl std::error::Error for Base64Error {}
