//! Error types for the plot layout crate

use thiserror::Error;

/// Errors that can occur when configuring or querying a plot layout.
///
/// Geometry itself never fails: degenerate rectangles are clamped instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A configuration value could not be interpreted
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The plot variant does not provide this capability
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::Serialization(err.to_string())
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
