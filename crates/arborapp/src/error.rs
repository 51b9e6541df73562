use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArborError {
    #[error("Tree not found: {0}")]
    TreeNotFound(String),

    #[error("Node not found at {0}")]
    NodeNotFound(String),

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    #[error("Sync failed: {0}")]
    SyncFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ArborError {
    /// Whether retrying the same request may succeed.
    ///
    /// Only sync failures qualify: the store keeps its previous snapshot, so the
    /// caller can resend the tree it still holds.
    pub fn is_transient(&self) -> bool {
        matches!(self, ArborError::SyncFailed(_))
    }
}

impl From<confique::Error> for ArborError {
    fn from(err: confique::Error) -> Self {
        ArborError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArborError>;
