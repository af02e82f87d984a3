//! Error types.
//!
//! Gridlink defines a small set of error conditions for the seams where a
//! collaborator can be absent or misconfigured. The helper operations in
//! [`crate::topology::helper`] do not handle these locally; a collaborator's
//! failure propagates unchanged to the caller.

use thiserror::Error;

/// Common gridlink error conditions.
#[derive(Debug, Error)]
pub enum GridError {
    /// A required provider capability is not registered on the session.
    #[error("no {provider} provider registered on this session")]
    ProviderMissing { provider: &'static str },

    /// A named cache is not known to the connection provider.
    #[error("cache {name} is not configured")]
    CacheNotFound { name: String },

    /// A protocol version string that does not name a known hotrod version.
    #[error("unsupported hotrod protocol version: {version}")]
    UnsupportedProtocolVersion { version: String },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl GridError {
    /// Create a ProviderMissing error for the named capability.
    pub fn provider_missing(provider: &'static str) -> Self {
        Self::ProviderMissing { provider }
    }

    /// Create a CacheNotFound error.
    pub fn cache_not_found(name: impl Into<String>) -> Self {
        Self::CacheNotFound { name: name.into() }
    }

    /// Create an UnsupportedProtocolVersion error.
    pub fn unsupported_protocol_version(version: impl Into<String>) -> Self {
        Self::UnsupportedProtocolVersion {
            version: version.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error indicates a missing collaborator rather than bad input.
    pub fn is_missing_collaborator(&self) -> bool {
        matches!(self, Self::ProviderMissing { .. } | Self::CacheNotFound { .. })
    }
}

/// Result type using GridError.
pub type GridResult<T> = Result<T, GridError>;
