//! Construction of the per-record description endpoint.
//!
//! Server-rendered pages historically reversed the `edit_description` route
//! with a dummy key and appended the real one. `EndpointTemplate` keeps that
//! shape: a template with a `{pk}` slot, or a prefix the key is appended to.

use crate::config::DEFAULT_CANCEL_MARKER;
use crate::types::RecordId;

/// Placeholder replaced by the percent-encoded record id.
pub const PK_PLACEHOLDER: &str = "{pk}";

/// Builds `editDescriptionUrl(pk)`.
pub trait EndpointResolver {
    /// URL of the description endpoint for `pk`, without any query marker.
    fn edit_description_url(&self, pk: &RecordId) -> String;

    /// Query marker that selects the read-only fragment.
    fn cancel_marker(&self) -> &str {
        DEFAULT_CANCEL_MARKER
    }
}

impl<F> EndpointResolver for F
where
    F: Fn(&RecordId) -> String,
{
    fn edit_description_url(&self, pk: &RecordId) -> String {
        self(pk)
    }
}

/// Append the cancel marker to an endpoint URL.
///
/// Endpoints without a query get `?marker`; ones that already carry a query
/// get `&marker`.
pub fn cancel_url(url: &str, marker: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{marker}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate {
    template: String,
    cancel_marker: String,
}

impl EndpointTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            cancel_marker: DEFAULT_CANCEL_MARKER.to_owned(),
        }
    }

    pub fn with_cancel_marker(mut self, marker: impl Into<String>) -> Self {
        self.cancel_marker = marker.into();
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl EndpointResolver for EndpointTemplate {
    fn edit_description_url(&self, pk: &RecordId) -> String {
        let segment = urlencoding::encode(pk.as_str());
        if self.template.contains(PK_PLACEHOLDER) {
            self.template.replace(PK_PLACEHOLDER, &segment)
        } else {
            format!("{}{}", self.template, segment)
        }
    }

    fn cancel_marker(&self) -> &str {
        &self.cancel_marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholder() {
        let template = EndpointTemplate::new("/cis/editdescription/{pk}");
        assert_eq!(
            template.edit_description_url(&RecordId::from(42u32)),
            "/cis/editdescription/42"
        );
    }

    #[test]
    fn test_template_prefix_appends() {
        let template = EndpointTemplate::new("/cis/editdescription/");
        assert_eq!(
            template.edit_description_url(&RecordId::from("SUS")),
            "/cis/editdescription/SUS"
        );
    }

    #[test]
    fn test_pk_is_encoded_as_one_segment() {
        let template = EndpointTemplate::new("/d/{pk}");
        assert_eq!(
            template.edit_description_url(&RecordId::from("a/b c")),
            "/d/a%2Fb%20c"
        );
    }

    #[test]
    fn test_cancel_url() {
        assert_eq!(cancel_url("/d/42", "cancel"), "/d/42?cancel");
        assert_eq!(cancel_url("/d/42?lang=en", "cancel"), "/d/42?lang=en&cancel");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |pk: &RecordId| format!("/custom/{pk}");
        assert_eq!(
            resolver.edit_description_url(&RecordId::from(7u32)),
            "/custom/7"
        );
        assert_eq!(resolver.cancel_marker(), "cancel");
    }
}
