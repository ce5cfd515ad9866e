//! Request model and the transport seam.

use std::fmt;
use std::future::Future;

use crate::error::RequestFailed;
use crate::form::FormBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// One outbound request for a description fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<FormBody>,
}

impl FragmentRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: FormBody) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Sends fragment requests and hands back the response body.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the page's event loop.
pub trait FragmentTransport {
    fn send(&self, request: FragmentRequest)
    -> impl Future<Output = Result<String, RequestFailed>>;
}

impl<T: FragmentTransport + ?Sized> FragmentTransport for &T {
    fn send(
        &self,
        request: FragmentRequest,
    ) -> impl Future<Output = Result<String, RequestFailed>> {
        (**self).send(request)
    }
}
