//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during metadata extraction
///
/// These are per-document errors: the reconciler reports them and moves
/// on to the next document rather than aborting the run.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// A front-matter block was present but its YAML did not parse
    #[error("malformed front matter: {0}")]
    MalformedFrontMatter(String),

    /// No explicit title found and the configuration requires one
    #[error("no explicit title in document '{0}'")]
    MissingTitle(String),
}
