//! Error types for the render pipeline

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a sign preview
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to launch or set up the browser
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    /// Failed to load the composed document
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// Failed to capture the rendered page
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to evaluate JavaScript in the page
    #[error("Script execution failed: {0}")]
    ScriptError(String),

    /// Operation timed out
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// CDP-specific error
    #[error("CDP error: {0}")]
    CdpError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CdpError(err.to_string())
    }
}
