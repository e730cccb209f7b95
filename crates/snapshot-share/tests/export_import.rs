//! Export/Import JSON fallback.

use olumi_snapshot_share::{
    encode_snapshot_to_url_param, export_snapshot_json, import_snapshot_json, ShareError,
    SnapshotSharePayload,
};
use serde_json::{json, Value};

#[test]
fn export_handles_what_links_cannot() {
    let filler: String = (0..40_000u32)
        .map(|i| char::from_u32(0x4E00 + (i * 7919) % 20_000).unwrap_or('x'))
        .collect();
    let payload = SnapshotSharePayload::new("big", "local-sim", json!({"notes": filler}));
    assert!(encode_snapshot_to_url_param(&payload).is_err());

    let exported = export_snapshot_json(&payload).unwrap();
    assert_eq!(import_snapshot_json(&exported), Some(payload));
}

#[test]
fn export_is_pretty_and_versioned() {
    let payload = SnapshotSharePayload::new("abc", "local-sim", json!({"nodes": []}));
    let exported = export_snapshot_json(&payload).unwrap();
    assert!(exported.contains('\n'));
    let value: Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(value["version"], json!(1));
    assert_eq!(value["seed"], json!("abc"));
}

#[test]
fn import_applies_share_validation() {
    assert!(import_snapshot_json("").is_none());
    assert!(import_snapshot_json("{").is_none());
    assert!(import_snapshot_json(r#"{"version":2,"data":{}}"#).is_none());
    assert!(import_snapshot_json(r#"{"version":1}"#).is_none());

    let imported = import_snapshot_json(r#"{"version":1,"seed":7,"data":null}"#).unwrap();
    assert_eq!(imported.seed, "7");
    assert_eq!(imported.model, "");
    assert_eq!(imported.data, Value::Null);
}

#[test]
fn payload_deserializes_through_serde() {
    let payload: SnapshotSharePayload =
        serde_json::from_str(r#"{"version":1,"seed":"s","model":"m","data":[1]}"#).unwrap();
    assert_eq!(payload, SnapshotSharePayload::new("s", "m", json!([1])));
    assert!(serde_json::from_str::<SnapshotSharePayload>(r#"{"version":3,"data":[]}"#).is_err());
}

#[test]
fn export_refuses_documents_import_cannot_read() {
    let deep = (0..200).fold(json!({}), |inner, _| json!({"child": inner}));
    let payload = SnapshotSharePayload::new("s", "m", deep);
    assert!(matches!(
        export_snapshot_json(&payload),
        Err(ShareError::Unreadable(_))
    ));
}
