//! Layered error definitions
//!
//! Categorized by source: config / fetch / dispatch

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Fetch Errors =====
    /// Log API returned a non-success status
    #[error("log fetch failed for '{url}': status {status}: {body}")]
    FetchStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// Log API request or body decode failure
    #[error("log fetch transport error for '{url}': {message}")]
    FetchTransport { url: String, message: String },

    // ===== Dispatch Errors =====
    /// Dispatch POST failed for one derived path
    #[error("dispatch failed for path '{path}' (status {status:?}): {message}")]
    Dispatch {
        path: String,
        status: Option<u16>,
        message: String,
    },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create fetch status error
    pub fn fetch_status(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::FetchStatus {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Create fetch transport error
    pub fn fetch_transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchTransport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create dispatch error
    pub fn dispatch(
        path: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Dispatch {
            path: path.into(),
            status,
            message: message.into(),
        }
    }

    /// Create other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
