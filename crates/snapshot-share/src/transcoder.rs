//! Bytes ↔ base64url text strategy.

use olumi_base64::{from_base64_url, to_base64_url};

use crate::TranscodeError;

/// Converts between raw bytes and unpadded base64url tokens.
///
/// Hosts with a native base64 primitive (a browser's `btoa`/`atob`) can plug
/// it in; everything else uses [`TableTranscoder`].
pub trait UrlTranscoder {
    fn encode(&self, bytes: &[u8]) -> String;
    fn decode(&self, token: &str) -> Result<Vec<u8>, TranscodeError>;
}

/// Pure table-driven transcoder. Works on every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableTranscoder;

impl UrlTranscoder for TableTranscoder {
    fn encode(&self, bytes: &[u8]) -> String {
        to_base64_url(bytes)
    }

    fn decode(&self, token: &str) -> Result<Vec<u8>, TranscodeError> {
        Ok(from_base64_url(token)?)
    }
}

impl<T: UrlTranscoder + ?Sized> UrlTranscoder for &T {
    fn encode(&self, bytes: &[u8]) -> String {
        (**self).encode(bytes)
    }

    fn decode(&self, token: &str) -> Result<Vec<u8>, TranscodeError> {
        (**self).decode(token)
    }
}
