use serde::{Deserialize, Serialize};

use crate::endpoint::EndpointTemplate;

/// Route of the description endpoint when the page does not say otherwise.
pub const DEFAULT_ENDPOINT: &str = "/cis/editdescription/{pk}";

/// Query marker that asks the endpoint for the read-only fragment.
pub const DEFAULT_CANCEL_MARKER: &str = "cancel";

/// Editor configuration, usually discovered from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Endpoint template; `{pk}` is replaced by the record id.
    pub endpoint: String,
    /// Absolute base that relative endpoints are resolved against.
    pub base_url: Option<String>,
    pub cancel_marker: String,
}

impl EditorConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn endpoint_template(&self) -> EndpointTemplate {
        EndpointTemplate::new(&self.endpoint).with_cancel_marker(&self.cancel_marker)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            base_url: None,
            cancel_marker: DEFAULT_CANCEL_MARKER.to_owned(),
        }
    }
}
