use std::rc::Rc;

use neo_bridge::{Backend, Bridge, BridgeError};

use crate::{ApiSelectMode, FrontendResult, View};

/// Receives the `set_api` failures the controller recovers from.
pub type FailureHandler = Rc<dyn Fn(&BridgeError)>;

/// What a dropdown change ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSelection {
    /// `set_api` accepted the selection.
    Forwarded,
    /// `set_api` failed and the error went to the failure handler.
    Recovered,
    /// The selection was only logged.
    Logged,
}

/// Drives the greeting form and the host API dropdown.
///
/// Greeting and API-list errors are returned to the caller; dropdown changes
/// never fail and report backend errors to the [`FailureHandler`] instead.
pub struct Controller<V, B> {
    view: V,
    backend: Backend<B>,
    mode: ApiSelectMode,
    on_failure: FailureHandler,
}

impl<V: View, B: Bridge> Controller<V, B> {
    pub fn new(view: V, backend: Backend<B>, mode: ApiSelectMode) -> Self {
        Self {
            view,
            backend,
            mode,
            on_failure: Rc::new(log_failure),
        }
    }

    #[must_use]
    pub fn with_failure_handler(mut self, handler: FailureHandler) -> Self {
        self.on_failure = handler;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn mode(&self) -> ApiSelectMode {
        self.mode
    }

    /// Sends the current name to `greet` and shows the reply.
    ///
    /// The message is left untouched when the call fails.
    pub async fn greet(&self) -> FrontendResult<()> {
        let name = self.view.input_value();
        let reply = self.backend.greet(&name).await?;
        self.view.set_message(&reply);
        Ok(())
    }

    /// Appends one dropdown option per API returned by `get_apis`, keeping
    /// the backend order. Existing options stay, so calling this twice lists
    /// every API twice.
    pub async fn populate_apis(&self) -> FrontendResult<usize> {
        let apis = self.backend.get_apis().await?;
        for api in &apis {
            self.view.append_option(api, api)?;
        }

        neo_logs::debug!(count = apis.len(), "host api dropdown populated");
        Ok(apis.len())
    }

    pub async fn select_api(&self, api_name: &str) -> ApiSelection {
        match self.mode {
            ApiSelectMode::LogOnly => {
                neo_logs::info!("{}", api_name);
                ApiSelection::Logged
            }
            ApiSelectMode::CallBackend => match self.backend.set_api(api_name).await {
                Ok(()) => ApiSelection::Forwarded,
                Err(err) => {
                    (self.on_failure)(&err);
                    ApiSelection::Recovered
                }
            },
        }
    }
}

/// Default [`FailureHandler`]: reports the error on the console only.
pub fn log_failure(err: &BridgeError) {
    neo_logs::error!("{}", err);
}
