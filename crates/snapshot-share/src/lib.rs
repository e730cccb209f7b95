//! olumi-snapshot-share - Share-link codec for canvas snapshots.
//!
//! A snapshot (nodes, edges, seed, model) becomes a single URL-safe param:
//!
//! - JSON up to the compression threshold (1500 bytes by default) is
//!   base64url-encoded as is.
//! - Larger JSON is raw-DEFLATE compressed first and the token is prefixed
//!   with `z:`.
//! - Params longer than the ceiling (8192 characters by default) are refused
//!   with [`ShareError::LinkTooLarge`]; the user falls back to
//!   [`export_snapshot_json`] / [`import_snapshot_json`].
//!
//! Decoding never fails loudly: anything that is not a valid shared snapshot
//! yields `None`.
//!
//! # Example
//!
//! ```
//! use olumi_snapshot_share::{encode_snapshot_to_url_param, try_decode_snapshot_param, SnapshotSharePayload};
//! use serde_json::json;
//!
//! let payload = SnapshotSharePayload::new("abc", "local-sim", json!({"nodes": [], "edges": [{"id": "e1"}]}));
//! let param = encode_snapshot_to_url_param(&payload).unwrap();
//! assert!(!param.starts_with("z:"));
//!
//! let decoded = try_decode_snapshot_param(&param).unwrap();
//! assert_eq!(decoded.seed, "abc");
//! assert_eq!(decoded.data["edges"], json!([{"id": "e1"}]));
//! assert!(try_decode_snapshot_param("not-base64!!!").is_none());
//! ```

mod codec;
mod compression;
mod error;
mod export;
mod options;
mod param;
mod payload;
mod transcoder;

pub use codec::SnapshotShareCodec;
pub use error::{DecodeError, ShareError, TranscodeError, LINK_TOO_LARGE_MESSAGE};
pub use export::{export_snapshot_json, import_snapshot_json};
pub use options::{
    ShareCodecOptions, DEFAULT_COMPRESS_THRESHOLD_BYTES, DEFAULT_MAX_INFLATED_BYTES,
    DEFAULT_MAX_PARAM_LEN,
};
pub use param::{SharedParam, COMPRESSED_MARKER};
pub use payload::{SnapshotSharePayload, SNAPSHOT_SHARE_VERSION};
pub use transcoder::{TableTranscoder, UrlTranscoder};

/// Encodes `payload` with the default options.
pub fn encode_snapshot_to_url_param(payload: &SnapshotSharePayload) -> Result<String, ShareError> {
    SnapshotShareCodec::default().encode(payload)
}

/// Decodes a share param with the default options, or `None`.
pub fn try_decode_snapshot_param(param: &str) -> Option<SnapshotSharePayload> {
    SnapshotShareCodec::default().try_decode(param)
}
