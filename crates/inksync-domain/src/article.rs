//! Article module - remote-side identities and payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the remote platform to a created article
///
/// Article ids are opaque strings minted by the platform on creation;
/// inksync never generates one locally. An id stored in the mapping is
/// treated as authoritative until the platform answers not-found for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Wrap a platform-assigned id string
    ///
    /// # Examples
    ///
    /// ```
    /// use inksync_domain::ArticleId;
    ///
    /// let id = ArticleId::new("0c881395eecffd03bea3");
    /// assert_eq!(id.as_str(), "0c881395eecffd03bea3");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Outbound article payload for create and update calls
///
/// Mirrors the request body the platform expects: title, body, tag names,
/// and a visibility flag. The client layer is responsible for the exact
/// wire encoding (tags become `[{name}]` objects).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDraft {
    /// Article title
    pub title: String,
    /// Full Markdown body
    pub body: String,
    /// Tag names; the platform requires at least one
    pub tags: Vec<String>,
    /// Whether the article is private
    pub private: bool,
}

/// Result of a successful create call
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedArticle {
    /// Id the platform assigned to the new article
    pub id: ArticleId,
    /// Public URL of the article, when the platform returns one
    pub url: Option<String>,
}

/// Remote article state returned by the fetch diagnostic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteArticle {
    /// Article id
    pub id: ArticleId,
    /// Current remote title
    pub title: String,
    /// Public URL
    pub url: Option<String>,
}

/// Owner of the configured API token, for the whoami diagnostic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthenticatedUser {
    /// Platform user id (login name)
    pub id: String,
    /// Number of articles the user has published, when reported
    pub items_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_id_display() {
        let id = ArticleId::new("b676e1196adbc1df5b48");
        assert_eq!(id.to_string(), "b676e1196adbc1df5b48");
    }

    #[test]
    fn test_article_id_equality() {
        assert_eq!(ArticleId::new("x1"), ArticleId::from("x1"));
        assert_ne!(ArticleId::new("x1"), ArticleId::new("x2"));
    }

    #[test]
    fn test_article_id_serde_transparent() {
        let id: ArticleId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }
}
