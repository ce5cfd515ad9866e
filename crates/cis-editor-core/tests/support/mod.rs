//! In-memory doubles for the editor's two seams.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;

use cis_editor_core::{
    ContainerId, FormBody, FormId, FragmentHost, FragmentRequest, FragmentTransport, Method,
    PlatformError, RequestFailed,
};
use serde::Deserialize;
use tokio::sync::oneshot;

/// A page with containers and forms, addressed by id.
#[derive(Default)]
pub struct MemoryPage {
    containers: RefCell<HashMap<ContainerId, String>>,
    forms: RefCell<HashMap<FormId, FormBody>>,
}

impl MemoryPage {
    pub fn with_container(self, id: &str, html: &str) -> Self {
        self.containers
            .borrow_mut()
            .insert(ContainerId::new(id), html.to_owned());
        self
    }

    pub fn set_form(&self, id: &str, body: FormBody) {
        self.forms.borrow_mut().insert(FormId::new(id), body);
    }

    pub fn content(&self, id: &str) -> Option<String> {
        self.containers.borrow().get(&ContainerId::new(id)).cloned()
    }
}

impl FragmentHost for MemoryPage {
    fn replace_content(&self, container: &ContainerId, html: &str) -> Result<(), PlatformError> {
        match self.containers.borrow_mut().get_mut(container) {
            Some(content) => {
                *content = html.to_owned();
                Ok(())
            }
            None => Err(PlatformError::MissingElement(container.to_string())),
        }
    }

    fn serialize_form(&self, form: &FormId) -> Result<FormBody, PlatformError> {
        self.forms
            .borrow()
            .get(form)
            .cloned()
            .ok_or_else(|| PlatformError::MissingElement(form.to_string()))
    }
}

/// Replays scripted responses and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<String, String>>>,
    requests: RefCell<Vec<FragmentRequest>>,
}

impl ScriptedTransport {
    pub fn respond(self, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(body.to_owned()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<FragmentRequest> {
        self.requests.borrow().clone()
    }
}

impl FragmentTransport for ScriptedTransport {
    fn send(
        &self,
        request: FragmentRequest,
    ) -> impl Future<Output = Result<String, RequestFailed>> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_owned()));
        async move { next.map_err(|message| RequestFailed::new(url, message)) }
    }
}

/// Holds each response until the test releases it, so completions can be
/// made to land in any order.
#[derive(Default)]
pub struct GatedTransport {
    gates: RefCell<HashMap<String, oneshot::Receiver<String>>>,
    requests: RefCell<Vec<FragmentRequest>>,
}

impl GatedTransport {
    /// Register a held response for `url`; sending on the returned half releases it.
    pub fn gate(&self, url: &str) -> oneshot::Sender<String> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(url.to_owned(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<FragmentRequest> {
        self.requests.borrow().clone()
    }
}

impl FragmentTransport for GatedTransport {
    fn send(
        &self,
        request: FragmentRequest,
    ) -> impl Future<Output = Result<String, RequestFailed>> {
        let url = request.url.clone();
        let gate = self.gates.borrow_mut().remove(&url);
        self.requests.borrow_mut().push(request);
        async move {
            match gate {
                Some(rx) => rx
                    .await
                    .map_err(|_| RequestFailed::new(url, "gate dropped")),
                None => Err(RequestFailed::new(url, "no gate")),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct DescriptionForm {
    #[serde(default)]
    desc: String,
    #[serde(default)]
    text: String,
}

/// Stand-in for the server's `edit_description` view over a single record.
///
/// GET renders the edit form, GET with `?cancel` renders the description,
/// POST validates and saves, re-rendering the form when `desc` is missing.
pub struct DescriptionEndpoint {
    pub url: String,
    pub desc: RefCell<String>,
    pub text: RefCell<String>,
    pub requests: RefCell<Vec<FragmentRequest>>,
}

impl DescriptionEndpoint {
    pub fn new(url: &str, desc: &str, text: &str) -> Self {
        Self {
            url: url.to_owned(),
            desc: RefCell::new(desc.to_owned()),
            text: RefCell::new(text.to_owned()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn view_fragment(&self) -> String {
        format!(
            "<h3>{}</h3><div>{}</div>",
            self.desc.borrow(),
            self.text.borrow()
        )
    }

    pub fn form_fragment(&self, error: Option<&str>) -> String {
        let error = error
            .map(|e| format!("<ul class=\"errorlist\"><li>{e}</li></ul>"))
            .unwrap_or_default();
        format!(
            "<form id=\"f1\">{error}<input name=\"desc\" value=\"{}\"><textarea name=\"text\">{}</textarea></form>",
            self.desc.borrow(),
            self.text.borrow()
        )
    }

    fn handle(&self, request: &FragmentRequest) -> Result<String, RequestFailed> {
        let (path, query) = match request.url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (request.url.as_str(), None),
        };
        if path != self.url {
            return Err(RequestFailed::status(&request.url, 404));
        }

        match request.method {
            Method::Get if query.is_some_and(|q| q.split('&').any(|p| p == "cancel")) => {
                Ok(self.view_fragment())
            }
            Method::Get => Ok(self.form_fragment(None)),
            Method::Post => {
                let encoded = match &request.body {
                    Some(body) => body
                        .encode()
                        .map_err(|e| RequestFailed::transport(&request.url, e))?,
                    None => String::new(),
                };
                let form: DescriptionForm = serde_html_form::from_str(&encoded)
                    .map_err(|e| RequestFailed::transport(&request.url, e))?;
                if form.desc.is_empty() {
                    return Ok(self.form_fragment(Some("This field is required.")));
                }
                *self.desc.borrow_mut() = form.desc;
                *self.text.borrow_mut() = form.text;
                Ok(self.view_fragment())
            }
        }
    }
}

impl FragmentTransport for DescriptionEndpoint {
    fn send(
        &self,
        request: FragmentRequest,
    ) -> impl Future<Output = Result<String, RequestFailed>> {
        let result = self.handle(&request);
        self.requests.borrow_mut().push(request);
        async move { result }
    }
}
