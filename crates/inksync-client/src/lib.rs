//! inksync Article Client
//!
//! Thin transport over the remote blogging platform's REST API,
//! implementing the `ArticleApi` trait from `inksync-domain`.
//!
//! # Operations
//!
//! - `create`: `POST {base}/items`, success iff 201 Created
//! - `update`: `PATCH {base}/items/{id}`, success iff 200 or 201;
//!   a 404 surfaces as the distinct `ApiError::NotFound` variant
//! - `fetch`: `GET {base}/items/{id}`, existence/diagnostics only
//! - `me`: `GET {base}/authenticated_user`, token-ownership diagnostic
//!
//! Each call is exactly one outbound request; there are no retries and
//! no rate limiting. Expected HTTP-level failures come back as values.
//!
//! # Providers
//!
//! - [`ArticleClient`]: the real reqwest-backed client
//! - [`MockArticleApi`]: scripted mock for testing the reconciler
//!
//! # Examples
//!
//! ```no_run
//! use inksync_client::{ArticleClient, ClientConfig};
//!
//! let client = ArticleClient::new(ClientConfig::new("my-token"));
//! // The ArticleApi methods are async; use them from an async context
//! ```

#![warn(missing_docs)]

mod client;
mod mock;

pub use client::{ArticleClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use mock::{MockArticleApi, RecordedCall};
