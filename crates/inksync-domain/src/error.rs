//! Shared error taxonomy for the infrastructure seams

use crate::article::ArticleId;
use thiserror::Error;

/// Errors surfaced by remote API operations
///
/// `NotFound` is deliberately its own variant rather than a status code
/// inside `Status`: the reconciler branches on it to recover from stale
/// article ids, while every other non-success status is terminal for the
/// document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The article id does not exist on the remote platform
    #[error("article {0} not found on the remote platform")]
    NotFound(ArticleId),

    /// Non-success, non-not-found HTTP status
    #[error("HTTP {status}: {detail}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        detail: String,
    },

    /// Network-level failure (connect, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// Response arrived but could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status associated with this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::InvalidResponse(_) => None,
        }
    }
}

/// The backing blob could not be read or written
///
/// A missing blob is not an error (backends report it as `None`); this
/// covers genuinely unavailable storage, which aborts the whole run.
#[derive(Debug, Error)]
#[error("blob store unavailable at {location}: {reason}")]
pub struct BlobError {
    /// Where the blob lives (path, or bucket/key)
    pub location: String,
    /// Underlying failure
    pub reason: String,
}

impl BlobError {
    /// Build an error for the given blob location
    pub fn new(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let not_found = ApiError::NotFound(ArticleId::new("x1"));
        assert_eq!(not_found.status(), Some(404));

        let status = ApiError::Status {
            status: 429,
            detail: "rate limited".to_string(),
        };
        assert_eq!(status.status(), Some(429));

        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.status(), None);
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound(ArticleId::new("b676e119"));
        assert_eq!(
            err.to_string(),
            "article b676e119 not found on the remote platform"
        );
    }
}
