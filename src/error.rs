//! Error types for the classicrypt library.

use crate::config::ConfigError;
use crate::engine::CipherKind;

/// Errors produced by key scheduling and cipher transforms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The raw key failed validation for the given cipher.
    #[error("invalid {cipher} key: {reason}")]
    InvalidKey {
        /// Cipher whose key was rejected.
        cipher: CipherKind,
        /// Human-readable reason, suitable for display.
        reason: String,
    },
    /// Reserved for structured input formats; any string is accepted today.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Key material was built with unusable options.
    #[error(transparent)]
    Options(#[from] ConfigError),
}

impl CipherError {
    /// Builds a [`CipherError::InvalidKey`] for `cipher`.
    pub(crate) fn invalid_key(cipher: CipherKind, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(%cipher, %reason, "key rejected");
        CipherError::InvalidKey { cipher, reason }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
