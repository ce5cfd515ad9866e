//! reqwest-backed fragment transport.
//!
//! reqwest uses `fetch` on wasm32 and hyper elsewhere, so the same transport
//! serves the page and native tooling. The wasm client only accepts absolute
//! URLs, hence the optional base.

use std::future::Future;

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::config::EditorConfig;
use crate::error::{PlatformError, RequestFailed};
use crate::form::FORM_CONTENT_TYPE;
use crate::transport::{FragmentRequest, FragmentTransport, Method};

/// Header the description endpoint uses to recognise fragment requests.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Option<Url>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base: None,
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, PlatformError> {
        let transport = Self::new();
        match &config.base_url {
            Some(base) => {
                let base = Url::parse(base)
                    .map_err(|e| PlatformError::Other(format!("invalid base url `{base}`: {e}")))?;
                Ok(transport.with_base(base))
            }
            None => Ok(transport),
        }
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Turn an endpoint URL into the absolute URL actually requested.
    pub fn resolve(&self, url: &str) -> Result<Url, RequestFailed> {
        if let Ok(absolute) = Url::parse(url) {
            return Ok(absolute);
        }
        match &self.base {
            Some(base) => base
                .join(url)
                .map_err(|e| RequestFailed::transport(url, e)),
            None => Err(RequestFailed::transport(url, "relative URL without a base")),
        }
    }

    async fn execute(&self, request: FragmentRequest) -> Result<String, RequestFailed> {
        let FragmentRequest { method, url, body } = request;
        let target = self.resolve(&url)?;

        let mut builder = match method {
            Method::Get => self.client.get(target),
            Method::Post => self.client.post(target),
        }
        .header(ACCEPT, "text/html")
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1);

        if let Some(body) = body {
            let encoded = body
                .encode()
                .map_err(|e| RequestFailed::transport(&url, e))?;
            builder = builder
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RequestFailed::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailed::status(&url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| RequestFailed::transport(&url, e))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentTransport for HttpTransport {
    fn send(
        &self,
        request: FragmentRequest,
    ) -> impl Future<Output = Result<String, RequestFailed>> {
        self.execute(request)
    }
}
