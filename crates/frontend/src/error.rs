use neo_bridge::BridgeError;
use neo_config::ConfigError;
use neo_web::WebError;
use thiserror::Error;

pub type FrontendResult<T> = std::result::Result<T, FrontendError>;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Web(#[from] WebError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("failed to load frontend config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to update the page: {0}")]
    Dom(String),
}
