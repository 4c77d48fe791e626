//! reqwest-backed article API client

use async_trait::async_trait;
use inksync_domain::traits::ArticleApi;
use inksync_domain::{
    ApiError, ArticleDraft, ArticleId, AuthenticatedUser, CreatedArticle, RemoteArticle,
};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

/// Default API base URL (the Qiita v2 API)
pub const DEFAULT_BASE_URL: &str = "https://qiita.com/api/v2";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the article client
///
/// Passed in at construction; the client holds no process-wide state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Bearer token for the Authorization header
    pub token: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with the default base URL and timeout
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Article platform API client
///
/// One outbound network request per call; failures are surfaced as
/// `ApiError` values, not absorbed.
pub struct ArticleClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

/// Request body for create and update calls
#[derive(Serialize)]
struct ItemRequest<'a> {
    title: &'a str,
    body: &'a str,
    tags: Vec<TagParam<'a>>,
    private: bool,
}

/// Tags go over the wire as `{name}` objects
#[derive(Serialize)]
struct TagParam<'a> {
    name: &'a str,
}

impl<'a> ItemRequest<'a> {
    fn from_draft(draft: &'a ArticleDraft) -> Self {
        Self {
            title: &draft.title,
            body: &draft.body,
            tags: draft
                .tags
                .iter()
                .map(|name| TagParam { name })
                .collect(),
            private: draft.private,
        }
    }
}

impl ArticleClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
            client,
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &ArticleId) -> String {
        format!("{}/items/{}", self.base_url, id)
    }

    /// Turn a non-success response into an `ApiError::Status`
    async fn status_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        ApiError::Status { status, detail }
    }
}

#[async_trait]
impl ArticleApi for ArticleClient {
    async fn create(&self, draft: &ArticleDraft) -> Result<CreatedArticle, ApiError> {
        let response = self
            .client
            .post(self.items_url())
            .bearer_auth(&self.token)
            .json(&ItemRequest::from_draft(draft))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::CREATED => response
                .json::<CreatedArticle>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            _ => Err(Self::status_error(response).await),
        }
    }

    async fn update(&self, id: &ArticleId, draft: &ArticleDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(self.item_url(id))
            .bearer_auth(&self.token)
            .json(&ItemRequest::from_draft(draft))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(id.clone())),
            _ => Err(Self::status_error(response).await),
        }
    }

    async fn fetch(&self, id: &ArticleId) -> Result<RemoteArticle, ApiError> {
        let response = self
            .client
            .get(self.item_url(id))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<RemoteArticle>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(id.clone())),
            _ => Err(Self::status_error(response).await),
        }
    }

    async fn me(&self) -> Result<AuthenticatedUser, ApiError> {
        let response = self
            .client
            .get(format!("{}/authenticated_user", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<AuthenticatedUser>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            _ => Err(Self::status_error(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = ArticleClient::new(
            ClientConfig::new("token").with_base_url("https://example.test/api/v2/"),
        );
        assert_eq!(client.items_url(), "https://example.test/api/v2/items");
        assert_eq!(
            client.item_url(&ArticleId::new("x1")),
            "https://example.test/api/v2/items/x1"
        );
    }

    #[test]
    fn test_item_request_wire_shape() {
        let draft = ArticleDraft {
            title: "Hello".to_string(),
            body: "content".to_string(),
            tags: vec!["rust".to_string(), "automation".to_string()],
            private: false,
        };

        let json = serde_json::to_value(ItemRequest::from_draft(&draft)).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["body"], "content");
        assert_eq!(json["private"], false);
        // Tags are `{name}` objects, per the platform API
        assert_eq!(json["tags"][0]["name"], "rust");
        assert_eq!(json["tags"][1]["name"], "automation");
    }

    #[test]
    fn test_created_response_parsing() {
        let json = r#"{
            "id": "4bd431809afb1bb99e4f",
            "url": "https://qiita.com/user/items/4bd431809afb1bb99e4f",
            "title": "Example"
        }"#;

        let created: CreatedArticle = serde_json::from_str(json).unwrap();
        assert_eq!(created.id.as_str(), "4bd431809afb1bb99e4f");
        assert!(created.url.as_deref().unwrap().contains("/items/"));
    }

    #[test]
    fn test_authenticated_user_parsing() {
        let json = r#"{"id": "alice", "items_count": 42}"#;
        let user: AuthenticatedUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "alice");
        assert_eq!(user.items_count, Some(42));
    }
}
