//! [`Bridge`] over the Tauri v2 global API, `window.__TAURI__.core.invoke`.
//!
//! Requires `app.withGlobalTauri` in the shell configuration.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use neo_web::describe_js_value;

use crate::{Bridge, BridgeError, BridgeResult};

#[wasm_bindgen]
extern "C" {
    // Throws synchronously when the global API was not injected.
    #[wasm_bindgen(catch, js_namespace = ["__TAURI__", "core"], js_name = invoke)]
    fn tauri_invoke(cmd: &str, args: JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TauriBridge;

#[async_trait(?Send)]
impl Bridge for TauriBridge {
    async fn invoke(&self, command: &str, args: Value) -> BridgeResult<Value> {
        // Plain objects, not `Map`s, so the shell can deserialize them.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_args = args
            .serialize(&serializer)
            .map_err(|err| BridgeError::Encode {
                command: command.to_owned(),
                reason: err.to_string(),
            })?;

        let promise = tauri_invoke(command, js_args)
            .map_err(|err| BridgeError::Unavailable(describe_js_value(&err)))?;

        let reply = JsFuture::from(promise)
            .await
            .map_err(|err| BridgeError::Rejected {
                command: command.to_owned(),
                reason: describe_js_value(&err),
            })?;

        if reply.is_undefined() || reply.is_null() {
            return Ok(Value::Null);
        }

        serde_wasm_bindgen::from_value(reply).map_err(|err| BridgeError::Decode {
            command: command.to_owned(),
            reason: err.to_string(),
        })
    }
}
