use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::FrontendResult;

const EMBEDDED_CONFIG: &str = include_str!("../frontend.toml");

/// What happens when the user picks another host API in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiSelectMode {
    /// Forward the selection to the `set_api` command.
    #[default]
    CallBackend,
    /// Only log the selection.
    LogOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSelectors {
    #[serde(alias = "greetInput")]
    pub greet_input: String,
    #[serde(alias = "greetMsg")]
    pub greet_msg: String,
    #[serde(alias = "greetForm")]
    pub greet_form: String,
    pub apis: String,
}

impl Default for ElementSelectors {
    fn default() -> Self {
        Self {
            greet_input: String::from("#greet-input"),
            greet_msg: String::from("#greet-msg"),
            greet_form: String::from("#greet-form"),
            apis: String::from("#apis"),
        }
    }
}

/// Frontend settings.
///
/// Keys are snake_case in `frontend.toml`; the camelCase spellings are
/// accepted as well so the same shape can be handed over from JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    #[serde(alias = "onApiSelect")]
    pub on_api_select: ApiSelectMode,
    pub autostart: bool,
    #[serde(alias = "logLevel")]
    pub log_level: String,
    pub elements: ElementSelectors,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            on_api_select: ApiSelectMode::default(),
            autostart: true,
            log_level: String::from("info"),
            elements: ElementSelectors::default(),
        }
    }
}

impl FrontendConfig {
    /// The config compiled into the module from `frontend.toml`.
    pub fn embedded() -> FrontendResult<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    pub fn from_toml(content: &str) -> FrontendResult<Self> {
        Ok(neo_config::from_str(content)?)
    }

    /// Console log level, `info` when `log_level` is not a level name.
    #[must_use]
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
