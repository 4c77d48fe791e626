//! Scripted mock of the article API for deterministic testing
//!
//! The mock returns pre-queued results without making any network
//! calls and records every call it receives, so tests can assert on
//! exactly which operations the reconciler performed and with what
//! payloads. An unscripted call fails loudly rather than inventing a
//! response.

use async_trait::async_trait;
use inksync_domain::traits::ArticleApi;
use inksync_domain::{
    ApiError, ArticleDraft, ArticleId, AuthenticatedUser, CreatedArticle, RemoteArticle,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A call observed by the mock, with the payload fields tests care about
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// A create call
    Create {
        /// Draft title
        title: String,
        /// Draft tags
        tags: Vec<String>,
    },
    /// An update call
    Update {
        /// Target article id
        id: ArticleId,
        /// Draft title
        title: String,
        /// Draft tags
        tags: Vec<String>,
    },
    /// A fetch call
    Fetch {
        /// Target article id
        id: ArticleId,
    },
    /// A whoami call
    Me,
}

#[derive(Default)]
struct MockState {
    create_results: VecDeque<Result<CreatedArticle, ApiError>>,
    update_results: VecDeque<Result<(), ApiError>>,
    fetch_results: VecDeque<Result<RemoteArticle, ApiError>>,
    me_results: VecDeque<Result<AuthenticatedUser, ApiError>>,
    calls: Vec<RecordedCall>,
}

/// Scripted `ArticleApi` implementation
///
/// Clones share state, so a test can keep one handle for assertions
/// while the reconciler under test owns another.
#[derive(Clone, Default)]
pub struct MockArticleApi {
    state: Arc<Mutex<MockState>>,
}

impl MockArticleApi {
    /// Create a mock with no scripted results
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next create call
    pub fn push_create(&self, result: Result<CreatedArticle, ApiError>) {
        self.state.lock().unwrap().create_results.push_back(result);
    }

    /// Queue a successful create returning the given id
    pub fn push_created_id(&self, id: &str) {
        self.push_create(Ok(CreatedArticle {
            id: ArticleId::new(id),
            url: None,
        }));
    }

    /// Queue the result of the next update call
    pub fn push_update(&self, result: Result<(), ApiError>) {
        self.state.lock().unwrap().update_results.push_back(result);
    }

    /// Queue the result of the next fetch call
    pub fn push_fetch(&self, result: Result<RemoteArticle, ApiError>) {
        self.state.lock().unwrap().fetch_results.push_back(result);
    }

    /// Queue the result of the next whoami call
    pub fn push_me(&self, result: Result<AuthenticatedUser, ApiError>) {
        self.state.lock().unwrap().me_results.push_back(result);
    }

    /// All calls observed so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of create calls observed
    pub fn create_calls(&self) -> usize {
        self.count(|c| matches!(c, RecordedCall::Create { .. }))
    }

    /// Number of update calls observed
    pub fn update_calls(&self) -> usize {
        self.count(|c| matches!(c, RecordedCall::Update { .. }))
    }

    fn count(&self, pred: impl Fn(&RecordedCall) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| pred(c)).count()
    }

    fn unscripted(&self, operation: &str) -> ApiError {
        ApiError::Transport(format!("mock: no scripted result for {operation}"))
    }
}

#[async_trait]
impl ArticleApi for MockArticleApi {
    async fn create(&self, draft: &ArticleDraft) -> Result<CreatedArticle, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::Create {
            title: draft.title.clone(),
            tags: draft.tags.clone(),
        });
        state
            .create_results
            .pop_front()
            .unwrap_or_else(|| Err(self.unscripted("create")))
    }

    async fn update(&self, id: &ArticleId, draft: &ArticleDraft) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::Update {
            id: id.clone(),
            title: draft.title.clone(),
            tags: draft.tags.clone(),
        });
        state
            .update_results
            .pop_front()
            .unwrap_or_else(|| Err(self.unscripted("update")))
    }

    async fn fetch(&self, id: &ArticleId) -> Result<RemoteArticle, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::Fetch { id: id.clone() });
        state
            .fetch_results
            .pop_front()
            .unwrap_or_else(|| Err(self.unscripted("fetch")))
    }

    async fn me(&self) -> Result<AuthenticatedUser, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall::Me);
        state
            .me_results
            .pop_front()
            .unwrap_or_else(|| Err(self.unscripted("me")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: "T".to_string(),
            body: "b".to_string(),
            tags: vec!["blog".to_string()],
            private: false,
        }
    }

    #[tokio::test]
    async fn test_scripted_create() {
        let mock = MockArticleApi::new();
        mock.push_created_id("x1");

        let created = mock.create(&draft()).await.unwrap();
        assert_eq!(created.id.as_str(), "x1");
        assert_eq!(mock.create_calls(), 1);
    }

    #[tokio::test]
    async fn test_unscripted_call_fails() {
        let mock = MockArticleApi::new();
        let result = mock.update(&ArticleId::new("x1"), &draft()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_calls_recorded_in_order() {
        let mock = MockArticleApi::new();
        mock.push_update(Ok(()));
        mock.push_created_id("x2");

        mock.update(&ArticleId::new("x1"), &draft()).await.unwrap();
        mock.create(&draft()).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], RecordedCall::Update { .. }));
        assert!(matches!(calls[1], RecordedCall::Create { .. }));
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let mock = MockArticleApi::new();
        let handle = mock.clone();
        mock.push_update(Ok(()));

        mock.update(&ArticleId::new("x1"), &draft()).await.unwrap();
        assert_eq!(handle.update_calls(), 1);
    }
}
