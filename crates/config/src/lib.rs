use derive_more::derive::From;
use serde::de::DeserializeOwned;

#[derive(Debug, From)]
pub enum ConfigError {
    DeserializationFailed(toml::de::Error),
}

impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeserializationFailed(err) => write!(f, "invalid config: {err}"),
        }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Deserializes `T` from TOML text, this is what the webview uses since it
/// has no filesystem and embeds its config with `include_str!`.
pub fn from_str<T>(content: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let config_obj: T = toml::from_str(content)?;
    Ok(config_obj)
}
