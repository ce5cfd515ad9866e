//! Core of the inline description editor.
//!
//! Lets a page swap a description container between its read-only rendering
//! and an edit form without reloading. The server renders both fragments;
//! this crate only decides which request to send and where the response goes.
//!
//! # Architecture
//!
//! - `types`: record, container and form identifiers
//! - `endpoint`: `editDescriptionUrl(pk)` construction
//! - `form`: form-encoded request bodies
//! - `transport`: request model and the `FragmentTransport` seam
//! - `http`: reqwest-backed transport (native and wasm32)
//! - `platform`: the `FragmentHost` seam over the page DOM
//! - `editor`: `DescriptionEditor`, the three user-facing operations
//!
//! Platform crates (`cis-editor-browser`) implement `FragmentHost`; tests
//! implement both seams with in-memory doubles.

pub mod config;
pub mod editor;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod http;
pub mod platform;
pub mod transport;
pub mod types;

pub use config::{DEFAULT_CANCEL_MARKER, DEFAULT_ENDPOINT, EditorConfig};
pub use editor::DescriptionEditor;
pub use endpoint::{EndpointResolver, EndpointTemplate, PK_PLACEHOLDER, cancel_url};
pub use error::{EditError, PlatformError, RequestFailed};
pub use form::FormBody;
pub use http::HttpTransport;
pub use platform::FragmentHost;
pub use transport::{FragmentRequest, FragmentTransport, Method};
pub use types::{ContainerId, FormId, RecordId};
