//! Publish outcome - what happened to one document in one run

use crate::article::ArticleId;
use serde::Serialize;

/// Per-document result of a reconciliation run
///
/// Produced once per document per run and aggregated into the run
/// report; never persisted. A `Failed` outcome carries the HTTP status
/// when the failure came from the remote API, and no status for
/// metadata or transport failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PublishOutcome {
    /// A new article was created and its id recorded in the mapping
    Created {
        /// Id the platform assigned
        id: ArticleId,
    },

    /// An existing article was updated in place
    Updated {
        /// Id that was updated (unchanged in the mapping)
        id: ArticleId,
    },

    /// The document could not be published this run
    Failed {
        /// HTTP status, when the remote API reported one
        status: Option<u16>,
        /// Human-readable reason
        detail: String,
    },
}

impl PublishOutcome {
    /// Whether the document ended the run consistent with remote state
    pub fn is_success(&self) -> bool {
        !matches!(self, PublishOutcome::Failed { .. })
    }

    /// Short label for report rows
    pub fn label(&self) -> &'static str {
        match self {
            PublishOutcome::Created { .. } => "created",
            PublishOutcome::Updated { .. } => "updated",
            PublishOutcome::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_classification() {
        let created = PublishOutcome::Created {
            id: ArticleId::new("x1"),
        };
        let failed = PublishOutcome::Failed {
            status: Some(403),
            detail: "forbidden".to_string(),
        };

        assert!(created.is_success());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            PublishOutcome::Updated { id: ArticleId::new("x") }.label(),
            "updated"
        );
        assert_eq!(
            PublishOutcome::Failed { status: None, detail: String::new() }.label(),
            "failed"
        );
    }
}
