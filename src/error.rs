//! Error handling for domain-vet
//!
//! Validation itself never errors; it answers with a boolean. Errors exist
//! only on the tooling surface: the TLD-list audit and the CLI.

use thiserror::Error;

/// Main error type for domain-vet tooling
#[derive(Error, Debug, Clone)]
pub enum DomainVetError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        url: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl DomainVetError {
    /// Create a network error
    pub fn network(message: impl Into<String>, url: Option<String>) -> Self {
        Self::Network {
            message: message.into(),
            url,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }
}

/// Result type alias for domain-vet operations
pub type Result<T> = std::result::Result<T, DomainVetError>;
