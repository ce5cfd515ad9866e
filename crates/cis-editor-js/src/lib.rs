//! WASM bindings for the inline description editor.
//!
//! Two entry points:
//!
//! - `JsDescriptionEditor`: an editor instance with promise-returning
//!   `beginEdit` / `saveEdit` / `cancelEdit`.
//! - `editdescription` / `savedescription` / `canceldescription`: global
//!   handlers with the signatures existing templates already wire into
//!   `onclick`, backed by one editor configured from the page.

mod editor;
mod handlers;
mod types;

pub use editor::*;
pub use handlers::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Another module on the page may already own the global subscriber.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
