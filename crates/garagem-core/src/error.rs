//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Remote Registry Errors
    // ─────────────────────────────────────────────────────────────
    /// Connection failure, timeout, non-2xx status or undecodable body.
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Vehicle not found: {id}")]
    NotFound { id: String },

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Errors raised by the remote registry boundary.
    ///
    /// These are the only failures a screen ever reports to the user.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Network { .. } | Error::NotFound { .. })
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::InvalidUrl { .. })
    }
}
