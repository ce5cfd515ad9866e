//! DOM access for the description editor.
//!
//! Containers are looked up by id on every call. The page may re-render them
//! between operations (a saved fragment replaces the form that held them), so
//! nothing is cached.

use cis_editor_core::{ContainerId, FormBody, FormId, FragmentHost, PlatformError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlFormElement};

/// `FragmentHost` backed by a live `Document`.
#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Use the document of the current window.
    pub fn from_window() -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::Other("no window".into()))?;
        let document = window
            .document()
            .ok_or(PlatformError::Other("no document".into()))?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, PlatformError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PlatformError::MissingElement(id.to_owned()))
    }

    /// Current content of a container.
    pub fn content(&self, container: &ContainerId) -> Result<String, PlatformError> {
        Ok(self.element(container.as_str())?.inner_html())
    }
}

impl FragmentHost for BrowserDom {
    fn replace_content(&self, container: &ContainerId, html: &str) -> Result<(), PlatformError> {
        self.element(container.as_str())?.set_inner_html(html);
        Ok(())
    }

    fn serialize_form(&self, form: &FormId) -> Result<FormBody, PlatformError> {
        let form_el = self
            .element(form.as_str())?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PlatformError::WrongElement {
                id: form.to_string(),
                expected: "form",
            })?;

        let data = FormData::new_with_form(&form_el).map_err(js_error)?;
        let entries = js_sys::try_iter(&data)
            .map_err(js_error)?
            .ok_or(PlatformError::Other("FormData is not iterable".into()))?;

        let mut body = FormBody::new();
        for entry in entries {
            let entry = js_sys::Array::from(&entry.map_err(js_error)?);
            let Some(name) = entry.get(0).as_string() else {
                continue;
            };
            // File inputs yield Blobs; the description endpoint only takes text.
            let Some(value) = entry.get(1).as_string() else {
                tracing::debug!(field = %name, "skipping non-text form entry");
                continue;
            };
            body.push(name, value);
        }
        Ok(body)
    }
}

/// Convert a thrown JS value into a platform error with a readable message.
pub fn js_error(err: JsValue) -> PlatformError {
    match gloo_utils::errors::JsError::try_from(err) {
        Ok(js) => PlatformError::Other(js.to_string()),
        Err(not_error) => PlatformError::Other(not_error.to_string()),
    }
}
