use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// A failure reported by the host rendering toolkit.
///
/// The synchronizer never retries or rewrites these; they surface to the
/// caller exactly as the host produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("host error: {0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("synchronizer already destroyed")]
    AlreadyDestroyed,

    #[error(transparent)]
    Host(#[from] HostError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    #[error("not enough points: need {needed}, have {have}")]
    NotEnoughPoints { needed: usize, have: usize },

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlobeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Measure(#[from] MeasureError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
