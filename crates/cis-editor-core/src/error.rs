//! Error types for the description editor.

use miette::Diagnostic;

/// A request that did not produce a usable fragment.
///
/// Network failures, non-success statuses and unreadable bodies all land here
/// without further classification. `message` is what a failed save writes
/// into its container.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cis_editor::request_failed))]
pub struct RequestFailed {
    pub url: String,
    pub message: String,
}

impl RequestFailed {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Failure for a response that arrived with a non-success status.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        let message = format!("Unable to load {url} status: {status}");
        Self { url, message }
    }

    /// Failure for a request that never got a response, or whose body could
    /// not be read.
    pub fn transport(url: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        let url = url.into();
        let message = format!("Unable to load {url}: {cause}");
        Self { url, message }
    }
}

/// Error from the page-side capability (DOM lookups and writes).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum PlatformError {
    #[error("no element with id `{0}`")]
    #[diagnostic(
        code(cis_editor::missing_element),
        help("the page must render the container and form before the handlers run")
    )]
    MissingElement(String),

    #[error("element `{id}` is not a {expected}")]
    #[diagnostic(code(cis_editor::wrong_element))]
    WrongElement { id: String, expected: &'static str },

    #[error("{0}")]
    #[diagnostic(code(cis_editor::platform))]
    Other(String),
}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError::Other(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError::Other(s)
    }
}

/// Error returned from every editor operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum EditError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Request(#[from] RequestFailed),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Platform(#[from] PlatformError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = RequestFailed::status("/cis/editdescription/42", 500);
        assert_eq!(
            err.to_string(),
            "Unable to load /cis/editdescription/42 status: 500"
        );
    }

    #[test]
    fn test_edit_error_is_transparent() {
        let err: EditError = RequestFailed::new("/x", "boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
