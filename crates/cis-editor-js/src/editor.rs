//! JsDescriptionEditor - the editor instance exposed to JavaScript.

use std::rc::Rc;

use cis_editor_browser::{
    BrowserDom, BrowserEditor, ContainerId, FormId, browser_editor, config_from_document,
};
use wasm_bindgen::prelude::*;

use crate::types::{JsEditorConfig, record_id_from_js, settle};

/// Inline description editor bound to the current document.
///
/// Each method sends one request and resolves once the container has been
/// updated (or left alone, on failure).
#[wasm_bindgen]
pub struct JsDescriptionEditor {
    inner: Rc<BrowserEditor>,
}

impl JsDescriptionEditor {
    pub(crate) fn from_editor(inner: Rc<BrowserEditor>) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl JsDescriptionEditor {
    /// Create an editor for the current document.
    ///
    /// `config` overrides what the page announces; pass nothing to use the
    /// page configuration as is.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsDescriptionEditor, JsError> {
        let overrides = JsEditorConfig::from_js(config)?;
        let dom = BrowserDom::from_window().map_err(|e| JsError::new(&e.to_string()))?;
        let page_config = config_from_document(dom.document());
        let config = match overrides {
            Some(overrides) => overrides.apply_to(page_config),
            None => page_config,
        };
        let inner = browser_editor(dom, &config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// Request the edit form for `pk` and show it in `containerId`.
    ///
    /// Resolves to `false` if the request failed; the container is unchanged.
    #[wasm_bindgen(js_name = beginEdit)]
    pub fn begin_edit(&self, container_id: String, pk: JsValue) -> Result<js_sys::Promise, JsError> {
        let pk = record_id_from_js(&pk)?;
        let editor = self.inner.clone();
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            settle(editor.begin_edit(&ContainerId::from(container_id), &pk).await)
        }))
    }

    /// Submit `formId` for `pk` and show the response in `containerId`.
    ///
    /// Resolves to `false` if the request failed; the container then holds
    /// the failure message.
    #[wasm_bindgen(js_name = saveEdit)]
    pub fn save_edit(
        &self,
        container_id: String,
        form_id: String,
        pk: JsValue,
    ) -> Result<js_sys::Promise, JsError> {
        let pk = record_id_from_js(&pk)?;
        let editor = self.inner.clone();
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            settle(
                editor
                    .save_edit(
                        &ContainerId::from(container_id),
                        &FormId::from(form_id),
                        &pk,
                    )
                    .await,
            )
        }))
    }

    /// Request the read-only rendering for `pk` and show it in `containerId`.
    ///
    /// Resolves to `false` if the request failed; the container is unchanged.
    #[wasm_bindgen(js_name = cancelEdit)]
    pub fn cancel_edit(&self, container_id: String, pk: JsValue) -> Result<js_sys::Promise, JsError> {
        let pk = record_id_from_js(&pk)?;
        let editor = self.inner.clone();
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            settle(editor.cancel_edit(&ContainerId::from(container_id), &pk).await)
        }))
    }

    /// URL the editor uses for `pk`.
    #[wasm_bindgen(js_name = editDescriptionUrl)]
    pub fn edit_description_url(&self, pk: JsValue) -> Result<String, JsError> {
        use cis_editor_browser::EndpointResolver;

        let pk = record_id_from_js(&pk)?;
        Ok(self.inner.endpoints().edit_description_url(&pk))
    }
}
