//! Canvas snapshot payload and its validation rules.

use serde::de::IgnoredAny;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{DecodeError, ShareError};

/// Schema version written into every payload.
pub const SNAPSHOT_SHARE_VERSION: u8 = 1;

/// A canvas graph captured for sharing.
///
/// Serializes as `{"version":1,"seed":…,"model":…,"data":…}`. Deserializing
/// applies the same checks and coercions as decoding a share param.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct SnapshotSharePayload {
    pub seed: String,
    pub model: String,
    /// Nodes and edges at share time. Any JSON value is accepted.
    pub data: Value,
}

impl SnapshotSharePayload {
    pub fn new(seed: impl Into<String>, model: impl Into<String>, data: Value) -> Self {
        Self {
            seed: seed.into(),
            model: model.into(),
            data,
        }
    }

    pub fn version(&self) -> u8 {
        SNAPSHOT_SHARE_VERSION
    }
}

impl Serialize for SnapshotSharePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SnapshotSharePayload", 4)?;
        state.serialize_field("version", &SNAPSHOT_SHARE_VERSION)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("model", &self.model)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl TryFrom<Value> for SnapshotSharePayload {
    type Error = DecodeError;

    /// Accepts an object with `version == 1` and a `data` field (`null`
    /// counts). `seed` and `model` are coerced to strings: missing or `null`
    /// become empty, scalars their JSON text.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(DecodeError::NotAnObject);
        };
        match fields.get("version") {
            Some(version) if version.as_f64() == Some(f64::from(SNAPSHOT_SHARE_VERSION)) => {}
            other => {
                return Err(DecodeError::UnsupportedVersion(
                    other.cloned().unwrap_or(Value::Null),
                ))
            }
        }
        let data = fields.remove("data").ok_or(DecodeError::MissingData)?;
        Ok(Self {
            seed: coerce_to_string(fields.remove("seed")),
            model: coerce_to_string(fields.remove("model")),
            data,
        })
    }
}

/// Fails when `json` would not parse back, so nothing is handed out that
/// decoding or import would reject.
pub(crate) fn ensure_readable(json: &[u8]) -> Result<(), ShareError> {
    serde_json::from_slice::<IgnoredAny>(json)
        .map(drop)
        .map_err(ShareError::Unreadable)
}

fn coerce_to_string(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
