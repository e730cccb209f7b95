use js_sys::{Function, Object, Reflect};
use olumi_base64::{standard_to_url, url_to_standard, Base64Error};
use olumi_snapshot_share::{TableTranscoder, TranscodeError, UrlTranscoder};
use wasm_bindgen::{JsCast, JsValue};

/// Base64 through the host's `btoa`/`atob`.
///
/// Bytes cross the boundary as a binary string, one UTF-16 unit per byte.
pub struct BrowserTranscoder {
    global: Object,
    btoa: Function,
    atob: Function,
}

impl BrowserTranscoder {
    /// Returns `None` when the global object lacks either primitive.
    pub fn from_globals() -> Option<Self> {
        let global = js_sys::global();
        let btoa = global_function(&global, "btoa")?;
        let atob = global_function(&global, "atob")?;
        Some(Self { global, btoa, atob })
    }
}

fn global_function(global: &Object, name: &str) -> Option<Function> {
    Reflect::get(global, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

impl UrlTranscoder for BrowserTranscoder {
    fn encode(&self, bytes: &[u8]) -> String {
        let binary: String = bytes.iter().map(|&b| char::from(b)).collect();
        match self
            .btoa
            .call1(&self.global, &JsValue::from_str(&binary))
            .ok()
            .and_then(|text| text.as_string())
        {
            Some(standard) => standard_to_url(&standard),
            None => TableTranscoder.encode(bytes),
        }
    }

    fn decode(&self, token: &str) -> Result<Vec<u8>, TranscodeError> {
        check_url_token(token)?;
        let binary = self
            .atob
            .call1(&self.global, &JsValue::from_str(&url_to_standard(token)))
            .map_err(|_| TranscodeError::Platform("atob rejected token".to_owned()))?
            .as_string()
            .ok_or_else(|| TranscodeError::Platform("atob returned a non-string".to_owned()))?;
        binary
            .chars()
            .map(|c| {
                u8::try_from(c)
                    .map_err(|_| TranscodeError::Platform("atob produced a non-byte char".to_owned()))
            })
            .collect()
    }
}

/// Rejects tokens with bytes outside the URL-safe alphabet (trailing `=`
/// aside). `atob` would otherwise accept `+`, `/` and whitespace that the
/// table codec refuses.
pub(crate) fn check_url_token(token: &str) -> Result<(), TranscodeError> {
    let body = token.trim_end_matches('=');
    match body
        .bytes()
        .enumerate()
        .find(|&(_, b)| !(b.is_ascii_alphanumeric() || b == b'-' || b == b'_'))
    {
        Some((position, byte)) => Err(Base64Error::InvalidChar { position, byte }.into()),
        None => Ok(()),
    }
}

/// Browser primitive when present, table codec otherwise.
pub enum HostTranscoder {
    Browser(BrowserTranscoder),
    Table(TableTranscoder),
}

impl HostTranscoder {
    /// Off wasm32 there are no JS globals to look up.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(browser) = BrowserTranscoder::from_globals() {
                return HostTranscoder::Browser(browser);
            }
        }
        tracing::debug!("btoa/atob unavailable, using table base64");
        HostTranscoder::Table(TableTranscoder)
    }
}

impl UrlTranscoder for HostTranscoder {
    fn encode(&self, bytes: &[u8]) -> String {
        match self {
            HostTranscoder::Browser(browser) => browser.encode(bytes),
            HostTranscoder::Table(table) => table.encode(bytes),
        }
    }

    fn decode(&self, token: &str) -> Result<Vec<u8>, TranscodeError> {
        match self {
            HostTranscoder::Browser(browser) => browser.decode(token),
            HostTranscoder::Table(table) => table.decode(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_token_check_matches_table_alphabet() {
        assert!(check_url_token("Zm9v-_8").is_ok());
        assert!(check_url_token("Zm8=").is_ok());
        assert!(check_url_token("").is_ok());
        for token in ["Zm9v+A", "Zm9v/A", "Zm 9v", "Zm9v\n", "not-base64!!!", "Zg=Z"] {
            assert!(check_url_token(token).is_err(), "{token:?}");
            assert!(TableTranscoder.decode(token).is_err(), "{token:?}");
        }
    }

    #[test]
    fn detect_falls_back_to_table_off_wasm() {
        let host = HostTranscoder::detect();
        assert!(matches!(host, HostTranscoder::Table(_)));
        let bytes: Vec<u8> = (0..=255).collect();
        let token = host.encode(&bytes);
        assert_eq!(token, TableTranscoder.encode(&bytes));
        assert_eq!(host.decode(&token).unwrap(), bytes);
    }
}
