use serde::{Deserialize, Serialize};

/// Payloads whose JSON is longer than this many bytes get deflated.
pub const DEFAULT_COMPRESS_THRESHOLD_BYTES: usize = 1500;

/// Longest param, in characters, that still survives browsers and chat/email
/// clients intact.
pub const DEFAULT_MAX_PARAM_LEN: usize = 8192;

/// Cap on inflated output when decoding a compressed param.
pub const DEFAULT_MAX_INFLATED_BYTES: usize = 4 << 20;

/// Tunables for [`SnapshotShareCodec`](crate::SnapshotShareCodec).
///
/// Deserializes from a partial camelCase object; missing fields keep their
/// defaults.
///
/// ```
/// use olumi_snapshot_share::ShareCodecOptions;
///
/// let options: ShareCodecOptions = serde_json::from_str(r#"{"maxParamLen": 2000}"#).unwrap();
/// assert_eq!(options.max_param_len, 2000);
/// assert_eq!(options.compress_threshold_bytes, 1500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareCodecOptions {
    pub compress_threshold_bytes: usize,
    pub max_param_len: usize,
    pub max_inflated_bytes: usize,
}

impl Default for ShareCodecOptions {
    fn default() -> Self {
        Self {
            compress_threshold_bytes: DEFAULT_COMPRESS_THRESHOLD_BYTES,
            max_param_len: DEFAULT_MAX_PARAM_LEN,
            max_inflated_bytes: DEFAULT_MAX_INFLATED_BYTES,
        }
    }
}
