//! Local and in-memory blob backends

use async_trait::async_trait;
use inksync_domain::traits::BlobStore;
use inksync_domain::BlobError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Blob stored as a single local file
///
/// A missing file reads as an absent blob. Writes create the parent
/// directory if needed and replace the file contents whole.
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn unavailable(&self, e: std::io::Error) -> BlobError {
        BlobError::new(self.location(), e.to_string())
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.unavailable(e)),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), BlobError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.unavailable(e))?;
            }
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| self.unavailable(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory blob for tests
///
/// Clones share contents, so a test can hold one handle while the store
/// under test holds another. Write failures can be injected to exercise
/// the store's error paths.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    contents: Arc<Mutex<Option<Vec<u8>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryBlobStore {
    /// Create an empty (absent) blob
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a blob with initial contents
    pub fn with_contents(bytes: Vec<u8>) -> Self {
        let store = Self::new();
        *store.contents.lock().unwrap() = Some(bytes);
        store
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current blob contents, for assertions
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn read(&self) -> Result<Option<Vec<u8>>, BlobError> {
        Ok(self.contents.lock().unwrap().clone())
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), BlobError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BlobError::new(self.location(), "injected write failure"));
        }
        *self.contents.lock().unwrap() = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let blob = MemoryBlobStore::new();
        assert!(blob.read().await.unwrap().is_none());

        blob.write(b"hello").await.unwrap();
        assert_eq!(blob.read().await.unwrap().unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_memory_injected_failure() {
        let blob = MemoryBlobStore::new();
        blob.fail_writes(true);
        assert!(blob.write(b"x").await.is_err());

        blob.fail_writes(false);
        assert!(blob.write(b"x").await.is_ok());
    }

    #[tokio::test]
    async fn test_file_missing_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let blob = FileBlobStore::new(dir.path().join("missing.json"));
        assert!(blob.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/mapping.json");
        let blob = FileBlobStore::new(&path);

        blob.write(b"{}").await.unwrap();
        assert_eq!(blob.read().await.unwrap().unwrap(), b"{}");
        assert!(path.exists());
    }
}
