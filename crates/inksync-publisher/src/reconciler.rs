//! Core reconciler implementation

use crate::error::PublishError;
use crate::report::RunReport;
use inksync_domain::traits::{ArticleApi, BlobStore};
use inksync_domain::{ApiError, ArticleId, Document, PublishOutcome};
use inksync_extract::MetadataExtractor;
use inksync_store::MappingStore;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Configuration for the reconciler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Publish articles as private
    #[serde(default)]
    pub private: bool,
}

/// One source file before metadata extraction
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Stable document key (path relative to the articles root)
    pub key: String,
    /// Raw file contents
    pub text: String,
}

/// Drives the publish-or-update decision for each document
///
/// Holds the single in-memory mapping snapshot for the duration of one
/// run. Documents are processed strictly sequentially; the mapping is
/// consulted per document and rewritten after each successful creation.
pub struct Reconciler<A: ArticleApi, B: BlobStore> {
    client: A,
    mapping: MappingStore<B>,
    config: PublisherConfig,
}

impl<A: ArticleApi, B: BlobStore> Reconciler<A, B> {
    /// Create a reconciler over a client and a loaded mapping
    pub fn new(client: A, mapping: MappingStore<B>, config: PublisherConfig) -> Self {
        Self {
            client,
            mapping,
            config,
        }
    }

    /// The remote id this document would be reconciled against
    ///
    /// An id embedded in the document takes precedence over the mapping
    /// entry as the most recent known truth.
    pub fn known_id<'a>(&'a self, doc: &'a Document) -> Option<&'a ArticleId> {
        doc.remote_id.as_ref().or_else(|| self.mapping.get(&doc.key))
    }

    /// Access the mapping snapshot (for reporting and planning)
    pub fn mapping(&self) -> &MappingStore<B> {
        &self.mapping
    }

    /// Extract and publish every source document, in order
    ///
    /// Metadata and API failures are recorded per document and the run
    /// continues; store-level failures abort immediately.
    pub async fn run(
        &mut self,
        extractor: &MetadataExtractor,
        sources: &[RawDocument],
    ) -> Result<RunReport, PublishError> {
        let mut report = RunReport::default();

        for source in sources {
            let outcome = match extractor.extract(&source.key, &source.text) {
                Ok(doc) => self.publish(&doc).await?,
                Err(e) => {
                    warn!(key = %source.key, error = %e, "skipping document");
                    PublishOutcome::Failed {
                        status: None,
                        detail: e.to_string(),
                    }
                }
            };
            report.record(source.key.clone(), outcome);
        }

        info!("run complete: {}", report.summary());
        Ok(report)
    }

    /// Publish one extracted document
    ///
    /// Returns the outcome for the run report. `Err` is reserved for
    /// store-level failures, which must abort the batch.
    pub async fn publish(&mut self, doc: &Document) -> Result<PublishOutcome, PublishError> {
        let draft = doc.draft(self.config.private);

        if let Some(id) = self.known_id(doc).cloned() {
            match self.client.update(&id, &draft).await {
                Ok(()) => {
                    info!(key = %doc.key, %id, "article updated");
                    return Ok(PublishOutcome::Updated { id });
                }
                Err(ApiError::NotFound(_)) => {
                    // The stored id no longer exists remotely. Discard it
                    // for this run and fall through to a fresh creation;
                    // the mapping entry is only overwritten on success.
                    warn!(key = %doc.key, stale = %id, "remote article gone, recreating");
                }
                Err(e) => {
                    error!(key = %doc.key, %id, error = %e, "update failed");
                    return Ok(PublishOutcome::Failed {
                        status: e.status(),
                        detail: e.to_string(),
                    });
                }
            }
        }

        match self.client.create(&draft).await {
            Ok(created) => {
                let id = created.id;
                if let Err(source) = self.mapping.set(doc.key.clone(), id.clone()).await {
                    // The article exists remotely but we failed to record
                    // it; surface the orphaned id instead of reporting
                    // success.
                    return Err(PublishError::MappingOutOfSync {
                        key: doc.key.clone(),
                        id,
                        source,
                    });
                }
                info!(key = %doc.key, %id, "article created");
                Ok(PublishOutcome::Created { id })
            }
            Err(e) => {
                error!(key = %doc.key, error = %e, "create failed");
                Ok(PublishOutcome::Failed {
                    status: e.status(),
                    detail: e.to_string(),
                })
            }
        }
    }
}
