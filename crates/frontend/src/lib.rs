//! Webview frontend for the neo-audio desktop shell.
//!
//! On page load the [`Controller`] is mounted onto the greeting form and the
//! host API dropdown, fills the dropdown from the `get_apis` command and then
//! reacts to form submissions and dropdown changes.

pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod view;

#[cfg(test)]
mod testing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub use config::{ApiSelectMode, ElementSelectors, FrontendConfig};
pub use controller::{ApiSelection, Controller, FailureHandler};
pub use dom::Elements;
pub use error::{FrontendError, FrontendResult};
pub use view::View;
