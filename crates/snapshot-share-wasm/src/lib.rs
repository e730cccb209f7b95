use olumi_snapshot_share::{ShareCodecOptions, SnapshotShareCodec, SnapshotSharePayload};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

mod transcoder;

pub use transcoder::{BrowserTranscoder, HostTranscoder};

type HostCodec = SnapshotShareCodec<HostTranscoder>;

thread_local! {
    static DEFAULT_CODEC: HostCodec =
        SnapshotShareCodec::with_transcoder(ShareCodecOptions::default(), HostTranscoder::detect());
}

fn with_codec<R>(options: Option<ShareCodecOptions>, f: impl FnOnce(&HostCodec) -> R) -> R {
    match options {
        Some(options) => f(&SnapshotShareCodec::with_transcoder(options, HostTranscoder::detect())),
        None => DEFAULT_CODEC.with(|codec| f(codec)),
    }
}

fn parse_options_internal(options: Value) -> Result<Option<ShareCodecOptions>, String> {
    if options.is_null() {
        return Ok(None);
    }
    serde_json::from_value(options)
        .map(Some)
        .map_err(|e| format!("invalid share options: {e}"))
}

fn encode_internal(payload: Value, options: Option<ShareCodecOptions>) -> Result<String, String> {
    let payload =
        SnapshotSharePayload::try_from(payload).map_err(|e| format!("invalid snapshot payload: {e}"))?;
    with_codec(options, |codec| codec.encode(&payload)).map_err(|e| e.to_string())
}

fn encode_with_options_internal(payload: Value, options: Value) -> Result<String, String> {
    encode_internal(payload, parse_options_internal(options)?)
}

fn decode_internal(param: &str, options: Option<ShareCodecOptions>) -> Option<SnapshotSharePayload> {
    with_codec(options, |codec| codec.try_decode(param))
}

/// Bad options decode nothing rather than falling back to defaults.
fn decode_with_options_internal(param: &str, options: Value) -> Option<SnapshotSharePayload> {
    decode_internal(param, parse_options_internal(options).ok()?)
}

fn from_js(value: JsValue, what: &str) -> Result<Value, String> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("invalid {what}: {e}"))
}

fn to_js(payload: Option<SnapshotSharePayload>) -> JsValue {
    payload
        .and_then(|p| p.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).ok())
        .unwrap_or(JsValue::NULL)
}

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

/// Encodes `{version, seed, model, data}` as a share param.
///
/// Throws an `Error` whose message is
/// `Link too large; please use Export/Import JSON` when the param would
/// exceed the ceiling.
#[wasm_bindgen(js_name = encodeSnapshotToUrlParam)]
pub fn encode_snapshot_to_url_param(payload: JsValue) -> Result<String, JsValue> {
    let payload = from_js(payload, "snapshot payload").map_err(js_error)?;
    encode_internal(payload, None).map_err(js_error)
}

#[wasm_bindgen(js_name = encodeSnapshotToUrlParamWithOptions)]
pub fn encode_snapshot_to_url_param_with_options(
    payload: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let payload = from_js(payload, "snapshot payload").map_err(js_error)?;
    let options = from_js(options, "share options").map_err(js_error)?;
    encode_with_options_internal(payload, options).map_err(js_error)
}

/// Decodes a share param into a plain object, or `null`. Never throws.
#[wasm_bindgen(js_name = tryDecodeSnapshotParam)]
pub fn try_decode_snapshot_param(param: &str) -> JsValue {
    to_js(decode_internal(param, None))
}

#[wasm_bindgen(js_name = tryDecodeSnapshotParamWithOptions)]
pub fn try_decode_snapshot_param_with_options(param: &str, options: JsValue) -> JsValue {
    match from_js(options, "share options") {
        Ok(options) => to_js(decode_with_options_internal(param, options)),
        Err(_) => JsValue::NULL,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        decode_internal, decode_with_options_internal, encode_internal, encode_with_options_internal,
        parse_options_internal,
    };
    use olumi_snapshot_share::{SnapshotSharePayload, LINK_TOO_LARGE_MESSAGE};
    use serde_json::{json, Value};

    fn payload_json(data: Value) -> Value {
        json!({"version": 1, "seed": "abc", "model": "local-sim", "data": data})
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let param = encode_internal(payload_json(json!({"nodes": [], "edges": [{"id": "e1"}]})), None)
            .expect("encode must succeed");
        assert!(!param.starts_with("z:"));
        let decoded = decode_internal(&param, None).expect("decode must succeed");
        assert_eq!(decoded.seed, "abc");
        assert_eq!(decoded.data["edges"], json!([{"id": "e1"}]));
    }

    #[test]
    fn float_numbers_are_accepted() {
        let payload = json!({"version": 1.0, "seed": 7.0, "model": "m", "data": {"w": 0.5}});
        let param = encode_internal(payload, None).expect("float version must be accepted");
        let decoded = decode_internal(&param, None).expect("decode must succeed");
        assert_eq!(decoded.seed, "7.0");
    }

    #[test]
    fn link_too_large_keeps_exact_message() {
        let options = json!({"maxParamLen": 10});
        let err = encode_with_options_internal(payload_json(json!({})), options)
            .expect_err("ceiling of 10 must be exceeded");
        assert_eq!(err, LINK_TOO_LARGE_MESSAGE);
    }

    #[test]
    fn invalid_payload_is_reported() {
        let err = encode_internal(json!({"version": 2, "data": {}}), None).unwrap_err();
        assert!(err.starts_with("invalid snapshot payload:"), "{err}");
        let err = encode_with_options_internal(payload_json(json!({})), json!({"maxParamLen": "x"}))
            .unwrap_err();
        assert!(err.starts_with("invalid share options:"), "{err}");
    }

    #[test]
    fn options_parse_partially_and_null_means_default() {
        assert_eq!(parse_options_internal(Value::Null), Ok(None));
        let options = parse_options_internal(json!({"compressThresholdBytes": 0}))
            .unwrap()
            .unwrap();
        assert_eq!(options.compress_threshold_bytes, 0);
        assert_eq!(options.max_param_len, 8192);
    }

    #[test]
    fn decode_with_bad_options_yields_nothing() {
        let param = encode_internal(payload_json(json!([1, 2])), None).unwrap();
        assert!(decode_with_options_internal(&param, Value::Null).is_some());
        assert!(decode_with_options_internal(&param, json!({"maxInflatedBytes": -1})).is_none());
        assert!(decode_with_options_internal(&param, json!("fast")).is_none());
    }

    #[test]
    fn decode_rejects_tokens_outside_url_alphabet() {
        let param = encode_internal(payload_json(json!({"k": "v"})), None).unwrap();
        assert!(decode_internal(&param, None).is_some());
        assert!(decode_internal(&format!("{param}+"), None).is_none());
        assert!(decode_internal(&format!(" {param}"), None).is_none());
        assert!(decode_internal("not-base64!!!", None).is_none());
        assert_eq!(decode_internal("", None), None::<SnapshotSharePayload>);
    }
}
