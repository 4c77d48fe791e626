//! inksync Mapping Store
//!
//! Durable key→id mapping bridging local documents to remote articles
//! across runs.
//!
//! # Architecture
//!
//! The entire mapping is one serialized JSON object held in a single
//! blob. It is loaded in full at process start and rewritten in full on
//! any mutation; there is no partial update and no locking (single-writer
//! assumption). Backends implement the [`BlobStore`] trait from
//! `inksync-domain`:
//!
//! - [`FileBlobStore`]: a local file
//! - [`S3BlobStore`]: one object in an S3-compatible bucket
//! - [`MemoryBlobStore`]: in-memory, for tests
//!
//! # Examples
//!
//! ```no_run
//! use inksync_store::{FileBlobStore, MappingStore};
//! use inksync_domain::ArticleId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let blob = FileBlobStore::new("mapping.json");
//! let mut store = MappingStore::load(blob).await?;
//!
//! store.set("a.md", ArticleId::new("x1")).await?;
//! assert!(store.get("a.md").is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod blob;
mod s3;

use inksync_domain::traits::BlobStore;
use inksync_domain::{ArticleId, BlobError};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

pub use blob::{FileBlobStore, MemoryBlobStore};
pub use s3::{S3BlobStore, S3Config, S3Credentials};

/// Errors that can occur during mapping store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing blob could not be read or written
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// The blob exists but does not deserialize as a mapping
    #[error("mapping blob at {location} is corrupt: {reason}")]
    Corrupt {
        /// Blob location
        location: String,
        /// Parse failure detail
        reason: String,
    },
}

/// Persistent mapping from document key to remote article id
///
/// One entry per document that has ever been successfully created
/// remotely. Entries are created on first creation, overwritten when a
/// stale id is recreated, and never deleted. A stored id is treated as
/// authoritative until the remote API reports it missing.
pub struct MappingStore<B: BlobStore> {
    blob: B,
    entries: BTreeMap<String, ArticleId>,
}

impl<B: BlobStore> MappingStore<B> {
    /// Load the mapping from its backing blob
    ///
    /// A missing blob is an empty mapping, not an error; a blob that
    /// cannot be read or parsed is.
    pub async fn load(blob: B) -> Result<Self, StoreError> {
        let entries = match blob.read().await? {
            Some(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                    location: blob.location(),
                    reason: e.to_string(),
                })?
            }
            None => BTreeMap::new(),
        };

        debug!(
            location = %blob.location(),
            entries = entries.len(),
            "mapping loaded"
        );

        Ok(Self { blob, entries })
    }

    /// Look up the remote id recorded for a document key
    pub fn get(&self, key: &str) -> Option<&ArticleId> {
        self.entries.get(key)
    }

    /// Record a remote id for a document key and persist the mapping
    ///
    /// The whole mapping is rewritten (last-writer-wins, no merge). A
    /// failed write is an error, never silently dropped; on failure the
    /// in-memory entry is rolled back so the store's view stays
    /// consistent with what is durable.
    pub async fn set(&mut self, key: impl Into<String>, id: ArticleId) -> Result<(), StoreError> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), id);

        match self.save().await {
            Ok(()) => Ok(()),
            Err(e) => {
                match previous {
                    Some(old) => {
                        self.entries.insert(key, old);
                    }
                    None => {
                        self.entries.remove(&key);
                    }
                }
                Err(e)
            }
        }
    }

    /// Iterate over all recorded entries, ordered by key
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ArticleId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn save(&self) -> Result<(), StoreError> {
        // BTreeMap keeps the serialized form stable across runs
        let bytes = serde_json::to_vec_pretty(&self.entries).map_err(|e| StoreError::Corrupt {
            location: self.blob.location(),
            reason: e.to_string(),
        })?;
        self.blob.write(&bytes).await?;
        Ok(())
    }
}
