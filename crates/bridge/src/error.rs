use thiserror::Error;

pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("backend bridge is not available: {0}")]
    Unavailable(String),

    #[error("command {command:?} was rejected: {reason}")]
    Rejected { command: String, reason: String },

    #[error("failed to encode arguments for {command:?}: {reason}")]
    Encode { command: String, reason: String },

    #[error("unexpected reply from {command:?}: {reason}")]
    Decode { command: String, reason: String },
}
