//! Browser DOM layer for the description editor.
//!
//! Implements `FragmentHost` over `web-sys` and reads the editor's
//! configuration from the page. Assumes a `wasm32-unknown-unknown` target.
//!
//! # Architecture
//!
//! - `dom`: `BrowserDom`, element lookup, content swaps and form serialization
//! - `page`: configuration discovery and `BrowserEditor` construction
//!
//! # Re-exports
//!
//! This crate re-exports `cis-editor-core` so consumers only need to depend
//! on `cis-editor-browser`.

// Re-export core crate
pub use cis_editor_core;
pub use cis_editor_core::*;

pub mod dom;
pub mod page;

pub use dom::BrowserDom;
pub use page::{BrowserEditor, ENDPOINT_ATTRIBUTE, browser_editor, config_from_document};
