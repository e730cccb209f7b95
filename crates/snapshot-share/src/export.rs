//! Export/Import JSON, the fallback when a snapshot is too large for a link.

use serde_json::Value;
use tracing::debug;

use crate::payload::ensure_readable;
use crate::{DecodeError, ShareError, SnapshotSharePayload};

/// Renders `payload` as a pretty-printed JSON document.
///
/// No length ceiling applies; this is the path for graphs that do not fit in
/// a link.
pub fn export_snapshot_json(payload: &SnapshotSharePayload) -> Result<String, ShareError> {
    let json = serde_json::to_string_pretty(payload)?;
    ensure_readable(json.as_bytes())?;
    Ok(json)
}

/// Reads a document written by [`export_snapshot_json`], applying the same
/// validation as share-param decoding. Returns `None` when it is not a valid
/// snapshot.
pub fn import_snapshot_json(text: &str) -> Option<SnapshotSharePayload> {
    let parsed = serde_json::from_str::<Value>(text)
        .map_err(DecodeError::from)
        .and_then(SnapshotSharePayload::try_from);
    match parsed {
        Ok(payload) => Some(payload),
        Err(err) => {
            debug!(error = %err, "rejecting imported snapshot");
            None
        }
    }
}
