use olumi_base64::Base64Error;
use serde_json::Value;
use thiserror::Error;

/// Text shown to users when a snapshot cannot be shared as a link.
pub const LINK_TOO_LARGE_MESSAGE: &str = "Link too large; please use Export/Import JSON";

/// Encode-time failures.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The encoded param, compressed or not, is longer than the ceiling.
    #[error("Link too large; please use Export/Import JSON")]
    LinkTooLarge { len: usize, limit: usize },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("deflate failed: {0}")]
    Compress(#[source] std::io::Error),
    /// Serialized fine but the JSON reader refuses it, typically nesting past
    /// its depth limit, so the result could never be decoded.
    #[error("snapshot JSON cannot be read back: {0}")]
    Unreadable(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error(transparent)]
    Base64(#[from] Base64Error),
    /// Failure reported by a host-provided base64 primitive.
    #[error("{0}")]
    Platform(String),
}

/// Why a share param or imported document was rejected.
///
/// Callers of the `try_*` entry points only ever see `None`; this type names
/// the cause for logs.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64url token: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("inflate failed: {0}")]
    Inflate(#[source] std::io::Error),
    #[error("inflated payload exceeds {limit} bytes")]
    InflatedTooLarge { limit: usize },
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot is not a JSON object")]
    NotAnObject,
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(Value),
    #[error("snapshot has no data field")]
    MissingData,
}
