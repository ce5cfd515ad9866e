//! Page-global handlers.
//!
//! Templates call these straight from `onclick`, e.g.
//! `onclick="editdescription('desc1', 42)"`. They fire and forget: the
//! request runs on the event loop and the outcome is only visible in the
//! container (or the console).

use std::cell::RefCell;
use std::rc::Rc;

use cis_editor_browser::{
    BrowserDom, BrowserEditor, ContainerId, FormId, browser_editor, config_from_document,
};
use wasm_bindgen::prelude::*;

use crate::editor::JsDescriptionEditor;
use crate::types::{JsEditorConfig, record_id_from_js};

thread_local! {
    static PAGE_EDITOR: RefCell<Option<Rc<BrowserEditor>>> = const { RefCell::new(None) };
}

fn build_page_editor(overrides: Option<JsEditorConfig>) -> Result<Rc<BrowserEditor>, JsError> {
    let dom = BrowserDom::from_window().map_err(|e| JsError::new(&e.to_string()))?;
    let mut config = config_from_document(dom.document());
    if let Some(overrides) = overrides {
        config = overrides.apply_to(config);
    }
    let editor = browser_editor(dom, &config).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(Rc::new(editor))
}

fn page_editor() -> Result<Rc<BrowserEditor>, JsError> {
    PAGE_EDITOR.with(|slot| {
        if let Some(editor) = slot.borrow().clone() {
            return Ok(editor);
        }
        let editor = build_page_editor(None)?;
        *slot.borrow_mut() = Some(editor.clone());
        Ok(editor)
    })
}

/// Replace the editor behind the global handlers.
///
/// Only needed when the page cannot announce its endpoint on `<body>`.
#[wasm_bindgen(js_name = configureDescriptionEditor)]
pub fn configure_description_editor(config: JsValue) -> Result<(), JsError> {
    let overrides = JsEditorConfig::from_js(config)?;
    let editor = build_page_editor(overrides)?;
    PAGE_EDITOR.with(|slot| *slot.borrow_mut() = Some(editor));
    Ok(())
}

/// The editor behind the global handlers, for promise-based use.
#[wasm_bindgen(js_name = pageDescriptionEditor)]
pub fn page_description_editor() -> Result<JsDescriptionEditor, JsError> {
    page_editor().map(JsDescriptionEditor::from_editor)
}

/// Show the edit form for `pk` in `divid`.
#[wasm_bindgen(js_name = editdescription)]
pub fn edit_description(divid: String, pk: JsValue) -> Result<(), JsError> {
    let pk = record_id_from_js(&pk)?;
    let editor = page_editor()?;
    wasm_bindgen_futures::spawn_local(async move {
        let _ = editor.begin_edit(&ContainerId::from(divid), &pk).await;
    });
    Ok(())
}

/// Submit `formid` for `pk` and show the result in `divid`.
#[wasm_bindgen(js_name = savedescription)]
pub fn save_description(divid: String, formid: String, pk: JsValue) -> Result<(), JsError> {
    let pk = record_id_from_js(&pk)?;
    let editor = page_editor()?;
    wasm_bindgen_futures::spawn_local(async move {
        let _ = editor
            .save_edit(&ContainerId::from(divid), &FormId::from(formid), &pk)
            .await;
    });
    Ok(())
}

/// Show the read-only description for `pk` in `divid`.
#[wasm_bindgen(js_name = canceldescription)]
pub fn cancel_description(divid: String, pk: JsValue) -> Result<(), JsError> {
    let pk = record_id_from_js(&pk)?;
    let editor = page_editor()?;
    wasm_bindgen_futures::spawn_local(async move {
        let _ = editor.cancel_edit(&ContainerId::from(divid), &pk).await;
    });
    Ok(())
}
