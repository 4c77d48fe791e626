//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates: the remote API
//! in `inksync-client`, the mapping blob backends in `inksync-store`.

use crate::article::{ArticleDraft, ArticleId, AuthenticatedUser, CreatedArticle, RemoteArticle};
use crate::error::{ApiError, BlobError};
use async_trait::async_trait;

/// Thin transport over the remote article API
///
/// Each call is one outbound request; expected HTTP-level failures come
/// back as `ApiError` values, never panics. There are no retries at this
/// layer.
#[async_trait]
pub trait ArticleApi {
    /// Create a new article; success iff the platform reports "created"
    async fn create(&self, draft: &ArticleDraft) -> Result<CreatedArticle, ApiError>;

    /// Update an existing article in place
    ///
    /// A not-found response is `ApiError::NotFound`, which callers treat
    /// as a recoverable signal rather than a terminal failure.
    async fn update(&self, id: &ArticleId, draft: &ArticleDraft) -> Result<(), ApiError>;

    /// Fetch the current remote state of an article
    ///
    /// Diagnostics only; not on the reconciliation hot path.
    async fn fetch(&self, id: &ArticleId) -> Result<RemoteArticle, ApiError>;

    /// Identify the owner of the configured token
    async fn me(&self) -> Result<AuthenticatedUser, ApiError>;
}

/// One named blob, read and written whole
///
/// The mapping store serializes its entire key→id map into a single
/// blob. Backends only need read-all and write-all semantics; a missing
/// blob reads as `None` and is not an error.
#[async_trait]
pub trait BlobStore {
    /// Read the entire blob; `None` if it does not exist yet
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError>;

    /// Overwrite the entire blob
    async fn write(&self, bytes: &[u8]) -> Result<(), BlobError>;

    /// Human-readable location for logs and error messages
    fn location(&self) -> String;
}
