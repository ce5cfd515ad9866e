//! Page-side capability used by the editor.
//!
//! The browser implementation lives in `cis-editor-browser`; anything else
//! that can look up elements by id and replace their content can host the
//! editor too.

use crate::error::PlatformError;
use crate::form::FormBody;
use crate::types::{ContainerId, FormId};

/// DOM access needed by the editor.
pub trait FragmentHost {
    /// Replace the container's content with `html`.
    fn replace_content(&self, container: &ContainerId, html: &str) -> Result<(), PlatformError>;

    /// Collect the successful controls of a form, in document order.
    fn serialize_form(&self, form: &FormId) -> Result<FormBody, PlatformError>;
}

impl<H: FragmentHost + ?Sized> FragmentHost for &H {
    fn replace_content(&self, container: &ContainerId, html: &str) -> Result<(), PlatformError> {
        (**self).replace_content(container, html)
    }

    fn serialize_form(&self, form: &FormId) -> Result<FormBody, PlatformError> {
        (**self).serialize_form(form)
    }
}
