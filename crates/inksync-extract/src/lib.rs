//! inksync Metadata Extractor
//!
//! Recovers the logical fields of an article (title, tags, remote id)
//! from a Markdown document's raw text, producing a ready-to-publish
//! [`Document`](inksync_domain::Document).
//!
//! # Overview
//!
//! Two embedding styles are recognized:
//!
//! - a YAML front-matter block delimited by `---` lines at the start of
//!   the file (`title`, `tags`, `id` fields); the block is stripped from
//!   the published body
//! - HTML comment markers anywhere in the text, e.g. `<!-- title: Hello -->`,
//!   `<!-- tags: rust, automation -->`, `<!-- id: 0c8813... -->`;
//!   markers stay in the body and round-trip through the platform
//!
//! Front-matter fields win when both styles are present. A missing title
//! falls back to the document key's file stem; an empty tag set is
//! replaced by the configured defaults (the platform rejects tagless
//! articles).
//!
//! # Example Usage
//!
//! ```
//! use inksync_extract::{ExtractConfig, MetadataExtractor};
//!
//! let extractor = MetadataExtractor::new(ExtractConfig::default());
//! let doc = extractor
//!     .extract("posts/hello.md", "<!-- title: Hello -->\nSome body.")
//!     .unwrap();
//!
//! assert_eq!(doc.title, "Hello");
//! assert!(doc.remote_id.is_none());
//! ```
//!
//! Extraction is a pure transform over text; no I/O happens here.

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod frontmatter;
mod markers;

#[cfg(test)]
mod tests;

pub use config::ExtractConfig;
pub use error::MetadataError;
pub use extractor::MetadataExtractor;
