//! Error types for DestLens

/// Result type alias using DestLens's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for DestLens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors (lexicons, thresholds, templates).
    /// Always fatal: a run aborts before any scoring happens.
    #[error("configuration error: {0}")]
    Config(String),

    /// A single input item that cannot be scored (non-text cell,
    /// out-of-range score). Recovered per item: skip and tally.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO errors from reading record or configuration files
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error aborts a batch run (configuration problems do;
    /// per-item problems do not).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Io(_) | Self::Internal(_))
    }

    /// Short tag used to bucket skip reasons in a run summary.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_fatal() {
        assert!(Error::config("empty category").is_fatal());
        assert!(!Error::invalid_input("cell is not text").is_fatal());
    }

    #[test]
    fn test_reason_tags() {
        assert_eq!(Error::invalid_input("x").reason(), "invalid_input");
        assert_eq!(Error::config("x").reason(), "config");
    }
}
