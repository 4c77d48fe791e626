//! Document module - the local unit of publishable content

use crate::article::{ArticleDraft, ArticleId};

/// One local Markdown file, ready to publish
///
/// A `Document` is the output of metadata extraction: the raw file text
/// has been resolved into a title, a body, a non-empty tag set, and an
/// optional remote id recovered from embedded markers. The `key` is the
/// document's stable identity across runs (its path relative to the
/// articles root) and is what the mapping store indexes by.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Stable identity of the document (relative source path)
    pub key: String,

    /// Resolved title; falls back to the key's file stem when no
    /// explicit title was embedded
    pub title: String,

    /// Markdown body to publish
    pub body: String,

    /// Resolved tag set; never empty (defaults applied during extraction)
    pub tags: Vec<String>,

    /// Remote id embedded in the document, if any
    ///
    /// When present it takes precedence over the mapping store entry as
    /// the most recent known truth.
    pub remote_id: Option<ArticleId>,
}

impl Document {
    /// Build the outbound payload for this document
    pub fn draft(&self, private: bool) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            body: self.body.clone(),
            tags: self.tags.clone(),
            private,
        }
    }
}

/// Derive a default title from a document key
///
/// Strips any directory components and the file extension, so
/// `"posts/intro-to-inksync.md"` becomes `"intro-to-inksync"`.
///
/// # Examples
///
/// ```
/// use inksync_domain::title_from_key;
///
/// assert_eq!(title_from_key("a.md"), "a");
/// assert_eq!(title_from_key("posts/2024/hello.md"), "hello");
/// ```
pub fn title_from_key(key: &str) -> String {
    let file_name = key
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(key);
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_plain_file() {
        assert_eq!(title_from_key("hello.md"), "hello");
    }

    #[test]
    fn test_title_from_nested_path() {
        assert_eq!(title_from_key("articles/2025/automation.md"), "automation");
    }

    #[test]
    fn test_title_from_key_without_extension() {
        assert_eq!(title_from_key("notes/readme"), "readme");
    }

    #[test]
    fn test_title_from_dotfile_keeps_name() {
        // A leading dot is not an extension separator for our purposes
        assert_eq!(title_from_key(".hidden"), ".hidden");
    }

    #[test]
    fn test_draft_carries_visibility() {
        let doc = Document {
            key: "a.md".to_string(),
            title: "Hello".to_string(),
            body: "body".to_string(),
            tags: vec!["rust".to_string()],
            remote_id: None,
        };

        let draft = doc.draft(false);
        assert_eq!(draft.title, "Hello");
        assert!(!draft.private);
        assert_eq!(draft.tags, vec!["rust".to_string()]);
    }
}
