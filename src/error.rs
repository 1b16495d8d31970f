use thiserror::Error;

/// Unified error type for assembly-publish operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid version format: {0}")]
    Version(String),

    #[error("Unknown bump mode: {0}")]
    Mode(String),

    #[error("Metadata file error: {0}")]
    Metadata(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in assembly-publish
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        PublishError::Version(msg.into())
    }

    /// Create an unknown-mode error with context
    pub fn mode(msg: impl Into<String>) -> Self {
        PublishError::Mode(msg.into())
    }

    /// Create a metadata file error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        PublishError::Metadata(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        PublishError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PublishError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        PublishError::Remote(msg.into())
    }
}
