//! S3 blob backend
//!
//! Reads and writes the mapping as a single object in an S3-compatible
//! bucket, signing each request with AWS Signature Version 4 directly
//! over `reqwest` rather than pulling in a vendor SDK. Only two
//! operations exist: GetObject and PutObject on one configured key.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use inksync_domain::traits::BlobStore;
use inksync_domain::BlobError;
use reqwest::{Method, StatusCode};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";
const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

/// Location of the mapping object
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Bucket name
    pub bucket: String,
    /// Object key within the bucket
    pub key: String,
    /// Bucket region
    pub region: String,
    /// Custom endpoint for S3-compatible services; requests use
    /// path-style addressing when set
    pub endpoint: Option<String>,
}

/// Static credentials for signing
#[derive(Debug, Clone)]
pub struct S3Credentials {
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
}

impl S3Credentials {
    /// Read credentials from the conventional environment variables
    pub fn from_env() -> Result<Self, BlobError> {
        let access_key_id = std::env::var("AWS_ACCESS_KEY_ID")
            .map_err(|_| BlobError::new("s3", "AWS_ACCESS_KEY_ID is not set"))?;
        let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY")
            .map_err(|_| BlobError::new("s3", "AWS_SECRET_ACCESS_KEY is not set"))?;
        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }
}

/// Blob stored as one object in an S3-compatible bucket
pub struct S3BlobStore {
    config: S3Config,
    credentials: S3Credentials,
    client: reqwest::Client,
}

impl S3BlobStore {
    /// Create a store for the configured object
    pub fn new(config: S3Config, credentials: S3Credentials) -> Self {
        Self {
            config,
            credentials,
            client: reqwest::Client::new(),
        }
    }

    /// Create a store with credentials from the environment
    pub fn from_env(config: S3Config) -> Result<Self, BlobError> {
        Ok(Self::new(config, S3Credentials::from_env()?))
    }

    /// Request host, full URL, and the canonical URI used for signing
    fn endpoints(&self) -> (String, String, String) {
        let encoded_key = uri_encode(&self.config.key);
        match &self.config.endpoint {
            Some(endpoint) => {
                let base = endpoint.trim_end_matches('/');
                let host = base
                    .trim_start_matches("https://")
                    .trim_start_matches("http://")
                    .to_string();
                let canonical_uri = format!("/{}/{}", self.config.bucket, encoded_key);
                let url = format!("{}{}", base, canonical_uri);
                (host, url, canonical_uri)
            }
            None => {
                let host = format!(
                    "{}.s3.{}.amazonaws.com",
                    self.config.bucket, self.config.region
                );
                let canonical_uri = format!("/{}", encoded_key);
                let url = format!("https://{}{}", host, canonical_uri);
                (host, url, canonical_uri)
            }
        }
    }

    fn authorization(
        &self,
        method: &str,
        canonical_uri: &str,
        host: &str,
        payload_hash: &str,
        amz_date: &str,
        date_stamp: &str,
    ) -> String {
        let canonical_headers = format!(
            "host:{host}\nx-amz-content-sha256:{payload_hash}\nx-amz-date:{amz_date}\n"
        );
        let canonical_request = format!(
            "{method}\n{canonical_uri}\n\n{canonical_headers}\n{SIGNED_HEADERS}\n{payload_hash}"
        );

        let scope = format!("{date_stamp}/{}/{SERVICE}/aws4_request", self.config.region);
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            sha256_hex(canonical_request.as_bytes())
        );

        let secret = format!("AWS4{}", self.credentials.secret_access_key);
        let key = hmac_sha256(secret.as_bytes(), date_stamp);
        let key = hmac_sha256(&key, &self.config.region);
        let key = hmac_sha256(&key, SERVICE);
        let key = hmac_sha256(&key, "aws4_request");
        let signature = hex::encode(hmac_sha256(&key, &string_to_sign));

        format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            self.credentials.access_key_id
        )
    }

    async fn request(
        &self,
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, BlobError> {
        let payload_hash = sha256_hex(body.as_deref().unwrap_or_default());
        let now = Utc::now();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date_stamp = now.format("%Y%m%d").to_string();

        let (host, url, canonical_uri) = self.endpoints();
        let authorization = self.authorization(
            method.as_str(),
            &canonical_uri,
            &host,
            &payload_hash,
            &amz_date,
            &date_stamp,
        );

        let mut request = self
            .client
            .request(method, &url)
            .header("x-amz-date", &amz_date)
            .header("x-amz-content-sha256", &payload_hash)
            .header("authorization", authorization);
        if let Some(body) = body {
            request = request.body(body);
        }

        request
            .send()
            .await
            .map_err(|e| BlobError::new(self.location(), e.to_string()))
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError> {
        let response = self.request(Method::GET, None).await?;
        match response.status() {
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| BlobError::new(self.location(), e.to_string()))?;
                Ok(Some(bytes.to_vec()))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(BlobError::new(
                self.location(),
                format!("GetObject returned HTTP {status}"),
            )),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), BlobError> {
        let response = self.request(Method::PUT, Some(bytes.to_vec())).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(BlobError::new(
                self.location(),
                format!("PutObject returned HTTP {}", response.status()),
            ))
        }
    }

    fn location(&self) -> String {
        format!("s3://{}/{}", self.config.bucket, self.config.key)
    }
}

fn hmac_sha256(key: &[u8], data: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Percent-encode an object key, preserving path separators
fn uri_encode(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
