//! Share-param encoder and decoder.

use serde_json::Value;
use tracing::{debug, warn};

use crate::compression::{deflate_raw, inflate_raw};
use crate::payload::ensure_readable;
use crate::{
    DecodeError, ShareCodecOptions, ShareError, SharedParam, SnapshotSharePayload, TableTranscoder,
    UrlTranscoder,
};

/// Encodes snapshots into URL-safe params and decodes them back.
///
/// ```
/// use olumi_snapshot_share::{SnapshotShareCodec, SnapshotSharePayload};
/// use serde_json::json;
///
/// let codec = SnapshotShareCodec::default();
/// let payload = SnapshotSharePayload::new("abc", "local-sim", json!({"nodes": [], "edges": []}));
/// let param = codec.encode(&payload).unwrap();
/// assert_eq!(codec.try_decode(&param), Some(payload));
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotShareCodec<T = TableTranscoder> {
    options: ShareCodecOptions,
    transcoder: T,
}

impl SnapshotShareCodec {
    pub fn new(options: ShareCodecOptions) -> Self {
        Self::with_transcoder(options, TableTranscoder)
    }
}

impl Default for SnapshotShareCodec {
    fn default() -> Self {
        Self::new(ShareCodecOptions::default())
    }
}

impl<T: UrlTranscoder> SnapshotShareCodec<T> {
    pub fn with_transcoder(options: ShareCodecOptions, transcoder: T) -> Self {
        Self {
            options,
            transcoder,
        }
    }

    pub fn options(&self) -> &ShareCodecOptions {
        &self.options
    }

    pub fn transcoder(&self) -> &T {
        &self.transcoder
    }

    /// Encodes `payload` as a share param.
    ///
    /// JSON above the compression threshold is deflated and marked with `z:`.
    /// The length ceiling applies to the final param, so a payload that is
    /// still too long after compression fails with
    /// [`ShareError::LinkTooLarge`] rather than being truncated. JSON the
    /// decoder could not parse back fails with [`ShareError::Unreadable`].
    pub fn encode(&self, payload: &SnapshotSharePayload) -> Result<String, ShareError> {
        let json = serde_json::to_vec(payload)?;
        ensure_readable(&json)?;
        self.encode_json_bytes(&json)
    }

    fn encode_json_bytes(&self, json: &[u8]) -> Result<String, ShareError> {
        let param = if json.len() > self.options.compress_threshold_bytes {
            let compressed = deflate_raw(json)?;
            debug!(
                json_bytes = json.len(),
                deflated_bytes = compressed.len(),
                "deflating share payload"
            );
            SharedParam::Compressed(&self.transcoder.encode(&compressed)).to_string()
        } else {
            SharedParam::Raw(&self.transcoder.encode(json)).to_string()
        };

        if param.len() > self.options.max_param_len {
            warn!(
                len = param.len(),
                limit = self.options.max_param_len,
                "share param exceeds length ceiling"
            );
            return Err(ShareError::LinkTooLarge {
                len: param.len(),
                limit: self.options.max_param_len,
            });
        }
        Ok(param)
    }

    /// Decodes a share param, returning `None` for anything that is not a
    /// valid shared snapshot. Never panics.
    pub fn try_decode(&self, param: &str) -> Option<SnapshotSharePayload> {
        match self.decode(param) {
            Ok(payload) => Some(payload),
            Err(err) => {
                debug!(error = %err, len = param.len(), "rejecting share param");
                None
            }
        }
    }

    fn decode(&self, param: &str) -> Result<SnapshotSharePayload, DecodeError> {
        let bytes = match SharedParam::parse(param) {
            SharedParam::Compressed(token) => {
                let deflated = self.transcoder.decode(token)?;
                inflate_raw(&deflated, self.options.max_inflated_bytes)?
            }
            SharedParam::Raw(token) => self.transcoder.decode(token)?,
        };
        let text = String::from_utf8_lossy(&bytes);
        let value: Value = serde_json::from_str(&text)?;
        SnapshotSharePayload::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn threshold_is_exclusive() {
        let codec = SnapshotShareCodec::default();
        let payload = SnapshotSharePayload::new("", "", json!(""));
        let base = serde_json::to_vec(&payload).unwrap().len();
        let filler = "a".repeat(codec.options().compress_threshold_bytes - base);
        let at_threshold = SnapshotSharePayload::new("", "", json!(filler.as_str()));
        assert_eq!(serde_json::to_vec(&at_threshold).unwrap().len(), 1500);
        assert!(!codec.encode(&at_threshold).unwrap().starts_with("z:"));

        let over = SnapshotSharePayload::new("", "", json!(format!("{filler}a")));
        assert!(codec.encode(&over).unwrap().starts_with("z:"));
    }

    #[test]
    fn ceiling_is_inclusive() {
        let payload = SnapshotSharePayload::new("s", "m", json!({"k": "v"}));
        let len = SnapshotShareCodec::default().encode(&payload).unwrap().len();
        let exact = SnapshotShareCodec::new(ShareCodecOptions {
            max_param_len: len,
            ..ShareCodecOptions::default()
        });
        assert!(exact.encode(&payload).is_ok());
        let short = SnapshotShareCodec::new(ShareCodecOptions {
            max_param_len: len - 1,
            ..ShareCodecOptions::default()
        });
        assert!(matches!(
            short.encode(&payload),
            Err(ShareError::LinkTooLarge { limit, .. }) if limit == len - 1
        ));
    }

    #[test]
    fn raw_param_is_plain_base64url_of_json() {
        let payload = SnapshotSharePayload::new("abc", "local-sim", json!({"nodes": []}));
        let param = SnapshotShareCodec::default().encode(&payload).unwrap();
        let json = olumi_base64::from_base64_url(&param).unwrap();
        assert_eq!(
            std::str::from_utf8(&json).unwrap(),
            r#"{"version":1,"seed":"abc","model":"local-sim","data":{"nodes":[]}}"#
        );
    }
}
