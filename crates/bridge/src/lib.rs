//! Access to the commands the desktop shell registers for the webview.
//!
//! [`Bridge`] is the untyped call-by-name seam, [`Backend`] wraps it with the
//! typed `greet`, `get_apis` and `set_api` commands.

pub mod commands;
pub mod error;
pub mod tauri;

#[cfg(any(test, feature = "testing"))]
pub mod memory;

pub use commands::Backend;
pub use error::{BridgeError, BridgeResult};
pub use tauri::TauriBridge;

use async_trait::async_trait;
use serde_json::Value;

/// Invokes a named backend command with JSON arguments and resolves to its
/// JSON reply.
///
/// Futures are not `Send`: the webview runs everything on its single
/// event loop.
#[async_trait(?Send)]
pub trait Bridge {
    async fn invoke(&self, command: &str, args: Value) -> BridgeResult<Value>;
}
