//! Types exposed to JavaScript via wasm-bindgen.

use cis_editor_browser::{EditError, EditorConfig, RecordId};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Editor configuration accepted from JavaScript.
///
/// Every field is optional; missing ones fall back to the page defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsEditorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_marker: Option<String>,
}

impl JsEditorConfig {
    /// Parse an optional config object; `undefined` and `null` mean "defaults".
    pub fn from_js(value: JsValue) -> Result<Option<Self>, JsError> {
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| JsError::new(&format!("Invalid editor config: {}", e)))
    }

    /// Overlay the fields that were given onto `base`.
    pub fn apply_to(self, mut base: EditorConfig) -> EditorConfig {
        if let Some(endpoint) = self.endpoint {
            base.endpoint = endpoint;
        }
        if let Some(base_url) = self.base_url {
            base.base_url = Some(base_url);
        }
        if let Some(marker) = self.cancel_marker {
            base.cancel_marker = marker;
        }
        base
    }
}

/// Largest magnitude an `f64` integer can have and still fit an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Accept a record id given as a JS string or number.
///
/// Numbers are spelled the way JS would concatenate them into a URL, so
/// `1e21` stays `1e+21` and nothing saturates at the `i64` range.
pub fn record_id_from_js(value: &JsValue) -> Result<RecordId, JsError> {
    if let Some(s) = value.as_string() {
        return Ok(RecordId::from(s));
    }
    match value.as_f64() {
        Some(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < I64_LIMIT => {
            Ok(RecordId::from(n as i64))
        }
        Some(n) if n.is_finite() => js_sys::Number::from(n)
            .to_string(10)
            .map(|s| RecordId::new(String::from(s)))
            .map_err(|_| JsError::new("Record id could not be formatted")),
        _ => Err(JsError::new("Record id must be a string or a finite number")),
    }
}

/// Promise settlement for an operation result.
///
/// Request failures resolve to `false`: they are already logged, and a failed
/// save has already put its message in the container. Page-side failures
/// (missing elements) reject.
pub(crate) fn settle(result: Result<(), EditError>) -> Result<JsValue, JsValue> {
    match result {
        Ok(()) => Ok(JsValue::TRUE),
        Err(EditError::Request(_)) => Ok(JsValue::FALSE),
        Err(EditError::Platform(err)) => Err(JsError::new(&err.to_string()).into()),
    }
}
