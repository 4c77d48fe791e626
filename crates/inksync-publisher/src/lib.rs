//! inksync Publisher
//!
//! The reconciliation core: for each local document, decide whether to
//! create a new remote article, update an existing one, or recover from
//! a stale remote id, and keep the persisted mapping consistent with
//! the outcome.
//!
//! # Overview
//!
//! The decision per document is driven purely by the presence or
//! absence of a known remote id and the outcome of the update attempt:
//!
//! ```text
//! known id?  ──no──────────────▶ create ──▶ record id ──▶ done
//!     │yes
//!     ▼
//!  update ──ok──▶ done
//!     │not-found
//!     ▼
//!  discard stale id ──▶ create ──▶ record new id ──▶ done
//! ```
//!
//! The not-found branch is what prevents a deleted or renamed remote
//! article from permanently blocking updates. Per-document failures
//! never abort the batch; store-level failures do.
//!
//! # Example Usage
//!
//! ```no_run
//! use inksync_client::{ArticleClient, ClientConfig};
//! use inksync_extract::MetadataExtractor;
//! use inksync_publisher::{PublisherConfig, RawDocument, Reconciler};
//! use inksync_store::{FileBlobStore, MappingStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArticleClient::new(ClientConfig::new("token"));
//! let mapping = MappingStore::load(FileBlobStore::new("mapping.json")).await?;
//! let mut reconciler = Reconciler::new(client, mapping, PublisherConfig::default());
//!
//! let sources = vec![RawDocument {
//!     key: "a.md".to_string(),
//!     text: "<!-- title: Hello -->\nBody.".to_string(),
//! }];
//!
//! let report = reconciler
//!     .run(&MetadataExtractor::default(), &sources)
//!     .await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod reconciler;
mod report;


pub use error::PublishError;
pub use reconciler::{PublisherConfig, RawDocument, Reconciler};
pub use report::{ReportEntry, RunReport};
