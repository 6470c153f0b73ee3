//! Classifier error types
//!
//! `classify` itself is total over `u64` and never fails. Errors only come
//! from the edges: signed input, range sweeps and configuration loading.

use thiserror::Error;

/// Error category for structured logging and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied a value outside the classifier's domain
    InputError,
    /// Config file missing, unreadable or malformed
    ConfigError,
}

impl ErrorCategory {
    /// Machine-readable code for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputError => "INPUT_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputError | Self::ConfigError => 2,
        }
    }
}

/// Classifier error with category and context
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("negative input {0} is not supported")]
    NegativeInput(i64),

    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },

    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ClassifierError {
    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NegativeInput(_) | Self::InvalidRange { .. } => ErrorCategory::InputError,
            Self::Config { .. } => ErrorCategory::ConfigError,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;
