//! Raw DEFLATE (RFC 1951, no zlib/gzip framing).

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::{DecodeError, ShareError};

pub(crate) fn deflate_raw(bytes: &[u8]) -> Result<Vec<u8>, ShareError> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(bytes.len() / 2), Compression::default());
    encoder.write_all(bytes).map_err(ShareError::Compress)?;
    encoder.finish().map_err(ShareError::Compress)
}

/// Inflates `bytes`, failing once the output would exceed `limit`.
pub(crate) fn inflate_raw(bytes: &[u8], limit: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    DeflateDecoder::new(bytes)
        .take(cap)
        .read_to_end(&mut out)
        .map_err(DecodeError::Inflate)?;
    if out.len() > limit {
        return Err(DecodeError::InflatedTooLarge { limit });
    }
    Ok(out)
}
