//! Adapter error types.

use thiserror::Error;

/// Result type alias using `AdapterError`.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Image adapter errors.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Bucket name was empty.
    #[error("bucket name is empty")]
    EmptyBucketName,

    /// File name was empty.
    #[error("file name is empty")]
    EmptyFileName,

    /// Source URL of the image to ingest was empty.
    #[error("url image is empty")]
    EmptySourceUrl,

    /// No provider has been bound as main.
    #[error("main adapter is not set")]
    MainProviderNotSet,

    /// The object key cannot be addressed by the provider.
    #[error("invalid asset key: {0}")]
    InvalidKey(String),

    /// Provider connection settings are unusable.
    #[error("provider configuration error: {0}")]
    Configuration(String),

    /// Provider health check failed at bind time.
    #[error("provider connection failed: {0}")]
    Connection(String),

    /// Network failure talking to the remote service.
    #[error("request to remote service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered but refused the operation.
    #[error("remote service rejected the request: {0}")]
    Remote(String),
}

impl AdapterError {
    /// Create an invalid key error.
    #[must_use]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a remote error.
    #[must_use]
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// True for errors caused by caller input, raised before any remote call.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyBucketName
                | Self::EmptyFileName
                | Self::EmptySourceUrl
                | Self::MainProviderNotSet
                | Self::InvalidKey(_)
        )
    }
}

impl From<opendal::Error> for AdapterError {
    fn from(err: opendal::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
