//! Page-level configuration and editor construction.
//!
//! Server-rendered pages announce the description endpoint on `<body>`:
//!
//! ```html
//! <body data-edit-description-url="/cis/editdescription/{pk}">
//! ```
//!
//! Without the attribute the default route is used. Relative endpoints are
//! resolved against `document.baseURI`.

use cis_editor_core::{DescriptionEditor, EditorConfig, EndpointTemplate, HttpTransport, PlatformError};
use web_sys::Document;

use crate::dom::BrowserDom;

pub const ENDPOINT_ATTRIBUTE: &str = "data-edit-description-url";

pub type BrowserEditor = DescriptionEditor<BrowserDom, HttpTransport, EndpointTemplate>;

/// Read the editor configuration announced by the page.
pub fn config_from_document(document: &Document) -> EditorConfig {
    let mut config = document
        .body()
        .and_then(|body| body.get_attribute(ENDPOINT_ATTRIBUTE))
        .filter(|endpoint| !endpoint.is_empty())
        .map(EditorConfig::with_endpoint)
        .unwrap_or_default();
    config.base_url = document.base_uri().ok().flatten();
    config
}

/// Build an editor over `dom` from an explicit configuration.
///
/// A configuration without a base URL inherits the document's.
pub fn browser_editor(dom: BrowserDom, config: &EditorConfig) -> Result<BrowserEditor, PlatformError> {
    let mut config = config.clone();
    if config.base_url.is_none() {
        config.base_url = dom.document().base_uri().ok().flatten();
    }
    let transport = HttpTransport::from_config(&config)?;
    tracing::debug!(endpoint = %config.endpoint, base = ?config.base_url, "description editor ready");
    Ok(DescriptionEditor::new(dom, transport, config.endpoint_template()))
}
