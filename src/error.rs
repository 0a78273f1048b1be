//! Error types for the Sarissa analysis library.
//!
//! All errors are represented by the [`SarissaError`] enum. Failures are always
//! returned to the caller; nothing in the reuse layer retries or swallows them.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::error::{Result, SarissaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SarissaError::resource_released("analyzer is closed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sarissa analysis operations.
#[derive(Error, Debug)]
pub enum SarissaError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A thread-scoped resource was used after its owner released it.
    #[error("Resource released: {0}")]
    ResourceReleased(String),

    /// An entry stage rejected a new input.
    #[error("Input binding error: {0}")]
    InputBinding(String),

    /// Analysis-related errors (tokenization, filtering, pipeline construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SarissaError.
pub type Result<T> = std::result::Result<T, SarissaError>;

impl SarissaError {
    /// Create a new resource released error.
    pub fn resource_released<S: Into<String>>(msg: S) -> Self {
        SarissaError::ResourceReleased(msg.into())
    }

    /// Create a new input binding error.
    pub fn input_binding<S: Into<String>>(msg: S) -> Self {
        SarissaError::InputBinding(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SarissaError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        SarissaError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SarissaError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SarissaError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Whether this error reports use of a released resource.
    pub fn is_resource_released(&self) -> bool {
        matches!(self, SarissaError::ResourceReleased(_))
    }
}
