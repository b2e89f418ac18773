use serde::{de::DeserializeOwned, Serialize};

use crate::{Bridge, BridgeError, BridgeResult};

pub const GREET: &str = "greet";
pub const GET_APIS: &str = "get_apis";
pub const SET_API: &str = "set_api";

#[derive(Debug, Serialize)]
pub struct GreetArgs<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetApiArgs<'a> {
    pub api_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NoArgs {}

/// Typed view over a [`Bridge`].
pub struct Backend<B> {
    bridge: B,
}

impl<B: Bridge> Backend<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// Asks the backend for a greeting addressed to `name`.
    pub async fn greet(&self, name: &str) -> BridgeResult<String> {
        self.call(GREET, &GreetArgs { name }).await
    }

    /// Lists the host API identifiers in the order the backend reports them.
    pub async fn get_apis(&self) -> BridgeResult<Vec<String>> {
        self.call(GET_APIS, &NoArgs {}).await
    }

    pub async fn set_api(&self, api_name: &str) -> BridgeResult<()> {
        self.call(SET_API, &SetApiArgs { api_name }).await
    }

    async fn call<A, R>(&self, command: &str, args: &A) -> BridgeResult<R>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let args = serde_json::to_value(args).map_err(|err| BridgeError::Encode {
            command: command.to_owned(),
            reason: err.to_string(),
        })?;

        neo_logs::debug!(command, "invoking backend command");
        let reply = self.bridge.invoke(command, args).await?;

        serde_json::from_value(reply).map_err(|err| BridgeError::Decode {
            command: command.to_owned(),
            reason: err.to_string(),
        })
    }
}
