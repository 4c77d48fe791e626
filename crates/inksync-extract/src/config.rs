//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Configuration for metadata extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Tags substituted when a document embeds none
    ///
    /// The remote platform requires at least one tag per article, so
    /// this set must not be empty.
    pub default_tags: Vec<String>,

    /// Treat a missing explicit title as an error instead of deriving
    /// one from the document key
    #[serde(default)]
    pub require_title: bool,
}

impl ExtractConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_tags.is_empty() {
            return Err("default_tags must contain at least one tag".to_string());
        }
        if self.default_tags.iter().any(|t| t.trim().is_empty()) {
            return Err("default_tags must not contain blank entries".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            default_tags: vec!["blog".to_string()],
            require_title: false,
        }
    }
}
