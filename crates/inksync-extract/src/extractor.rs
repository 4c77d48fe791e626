//! Core extractor implementation

use crate::config::ExtractConfig;
use crate::error::MetadataError;
use crate::{frontmatter, markers};
use inksync_domain::{title_from_key, ArticleId, Document};
use tracing::debug;

/// Turns raw document text into a ready-to-publish [`Document`]
///
/// Pure transform: the extractor never touches the filesystem or the
/// network. Callers read the file and hand over its text with the
/// document key.
pub struct MetadataExtractor {
    config: ExtractConfig,
}

impl MetadataExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Extract metadata from raw text
    ///
    /// Resolution order per field: front matter, then comment markers,
    /// then the configured fallback (file-stem title, default tags).
    ///
    /// # Errors
    ///
    /// - `MalformedFrontMatter` if a front-matter block is present but
    ///   its YAML does not parse
    /// - `MissingTitle` if no explicit title was embedded and the
    ///   configuration sets `require_title`
    pub fn extract(&self, key: &str, raw: &str) -> Result<Document, MetadataError> {
        let (front, body) = match frontmatter::parse(raw)? {
            Some((front, body)) => (Some(front), body),
            None => (None, raw.to_string()),
        };

        let title = front
            .as_ref()
            .and_then(|f| f.title.clone())
            .or_else(|| markers::value(raw, "title"));
        let title = match title {
            Some(title) => title,
            None if self.config.require_title => {
                return Err(MetadataError::MissingTitle(key.to_string()));
            }
            None => {
                let derived = title_from_key(key);
                debug!(key, title = %derived, "no embedded title, derived from key");
                derived
            }
        };

        let mut tags = front.as_ref().map(|f| f.tags.clone()).unwrap_or_default();
        if tags.is_empty() {
            if let Some(raw_tags) = markers::value(raw, "tags") {
                tags = markers::split_tags(&raw_tags);
            }
        }
        if tags.is_empty() {
            debug!(key, "no embedded tags, applying defaults");
            tags = self.config.default_tags.clone();
        }

        let remote_id = front
            .as_ref()
            .and_then(|f| f.id.clone())
            .or_else(|| markers::value(raw, "id"))
            .map(ArticleId::new);

        Ok(Document {
            key: key.to_string(),
            title,
            body,
            tags,
            remote_id,
        })
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}
