//! The inline description editor.
//!
//! Three operations, one request each. The editor holds no mode of its own:
//! whether a container shows the form or the rendered description is
//! whatever the server last sent.
//!
//! Failure policy differs per operation. `begin_edit` and `cancel_edit` only
//! log, so the container keeps what it had. `save_edit` writes the failure
//! message into the container, replacing the form.
//!
//! Overlapping calls on one container are not sequenced; the last completion
//! to run owns the container.

use crate::endpoint::{EndpointResolver, cancel_url};
use crate::error::{EditError, RequestFailed};
use crate::platform::FragmentHost;
use crate::transport::{FragmentRequest, FragmentTransport};
use crate::types::{ContainerId, FormId, RecordId};

pub struct DescriptionEditor<H, T, R> {
    host: H,
    transport: T,
    endpoints: R,
}

impl<H, T, R> DescriptionEditor<H, T, R>
where
    H: FragmentHost,
    T: FragmentTransport,
    R: EndpointResolver,
{
    pub fn new(host: H, transport: T, endpoints: R) -> Self {
        Self {
            host,
            transport,
            endpoints,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoints(&self) -> &R {
        &self.endpoints
    }

    /// Swap the container to the edit form for `pk`.
    ///
    /// On failure the container is left as it was.
    pub async fn begin_edit(&self, container: &ContainerId, pk: &RecordId) -> Result<(), EditError> {
        let url = self.endpoints.edit_description_url(pk);
        match self.fetch(FragmentRequest::get(url)).await {
            Ok(fragment) => self.swap(container, &fragment),
            Err(err) => {
                tracing::warn!(%container, %pk, error = %err, "begin edit failed");
                Err(err.into())
            }
        }
    }

    /// Submit `form` and swap the container to whatever the server returns.
    ///
    /// A failed request replaces the container's content with the failure
    /// message. A missing form aborts before anything is sent.
    pub async fn save_edit(
        &self,
        container: &ContainerId,
        form: &FormId,
        pk: &RecordId,
    ) -> Result<(), EditError> {
        let body = self.host.serialize_form(form).inspect_err(|err| {
            tracing::error!(%form, %pk, error = %err, "cannot serialize description form");
        })?;

        let url = self.endpoints.edit_description_url(pk);
        match self.fetch(FragmentRequest::post(url, body)).await {
            Ok(fragment) => self.swap(container, &fragment),
            Err(err) => {
                tracing::warn!(%container, %pk, error = %err, "save failed");
                self.swap(container, &err.message)?;
                Err(err.into())
            }
        }
    }

    /// Swap the container back to the read-only rendering for `pk`.
    ///
    /// On failure the container is left as it was.
    pub async fn cancel_edit(&self, container: &ContainerId, pk: &RecordId) -> Result<(), EditError> {
        let url = cancel_url(
            &self.endpoints.edit_description_url(pk),
            self.endpoints.cancel_marker(),
        );
        match self.fetch(FragmentRequest::get(url)).await {
            Ok(fragment) => self.swap(container, &fragment),
            Err(err) => {
                tracing::warn!(%container, %pk, error = %err, "cancel edit failed");
                Err(err.into())
            }
        }
    }

    async fn fetch(&self, request: FragmentRequest) -> Result<String, RequestFailed> {
        tracing::debug!(method = %request.method, url = %request.url, "requesting description fragment");
        self.transport.send(request).await
    }

    fn swap(&self, container: &ContainerId, html: &str) -> Result<(), EditError> {
        tracing::trace!(%container, len = html.len(), "replacing container content");
        self.host.replace_content(container, html).map_err(|err| {
            tracing::error!(%container, error = %err, "cannot update description container");
            EditError::from(err)
        })
    }
}
