pub mod log;
pub mod shims;

pub use shims::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebError {
    #[error("No Window Found")]
    NoWindow,

    #[error("No Document Found")]
    NoDocument,

    #[error("selector {selector:?} is not valid: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no element matches {0:?}")]
    MissingElement(String),

    #[error("element {selector:?} is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error("failed to attach {event:?} listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    #[error("logging already initialized: {0}")]
    LoggingInitialized(String),
}
