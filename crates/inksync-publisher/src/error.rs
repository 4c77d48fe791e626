//! Error types for the publisher

use inksync_domain::ArticleId;
use inksync_store::StoreError;
use thiserror::Error;

/// Run-aborting errors
///
/// Per-document failures (metadata, transport, HTTP status) become
/// `Failed` outcomes in the run report instead; only store-level
/// problems surface here, because a mapping that cannot be read or
/// written makes every further decision unsafe.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The mapping store could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An article was created remotely but recording its id failed
    ///
    /// The remote platform now has an article the mapping does not know
    /// about; the next run would create a duplicate. This is reported
    /// loudly with the orphaned id so the operator can repair the
    /// mapping by hand.
    #[error(
        "article {id} was created for '{key}' but the mapping write failed \
         (remote and local state now disagree): {source}"
    )]
    MappingOutOfSync {
        /// Document key that was being published
        key: String,
        /// Id the platform assigned to the orphaned article
        id: ArticleId,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },
}
