//! Error types for namewright.
//!
//! Naming itself is total over a valid [`NamingContext`](crate::NamingContext):
//! the only failures are configuration mistakes caught while resolving the
//! context and requests for resource kinds that have no template.

/// The main error type for namewright operations.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid configuration value
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    /// Configuration file not found
    #[error("Configuration file not found at path: {0}")]
    ConfigNotFound(String),

    /// TOML parsing errors (for when we parse TOML in config)
    #[error("TOML error: {0}")]
    Toml(String),

    /// JSON serialization errors (wraps serde_json errors)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource kind without a registered naming template
    #[error("Unsupported resource type: {0}")]
    UnsupportedResourceType(String),
}

impl NamingError {
    /// Create a config error with a message
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid config error
    pub fn invalid_config<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported resource type error
    pub fn unsupported<S: Into<String>>(kind: S) -> Self {
        Self::UnsupportedResourceType(kind.into())
    }

    /// Check if this error comes from operator configuration.
    ///
    /// These are deterministic; retrying with the same input yields the same
    /// error, so callers should surface them instead of retrying.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidConfig { .. } | Self::ConfigNotFound(_) | Self::Toml(_)
        )
    }
}

/// Result type alias for namewright operations
pub type Result<T> = std::result::Result<T, NamingError>;
