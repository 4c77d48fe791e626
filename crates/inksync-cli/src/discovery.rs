//! Document discovery - walk the articles directory for Markdown files.

use crate::error::{CliError, Result};
use inksync_publisher::RawDocument;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Collect every Markdown file under `root` as a raw document.
///
/// Keys are paths relative to `root` with forward-slash separators, so
/// the mapping stays stable across platforms. Files are visited in
/// name order for deterministic runs.
pub fn collect_documents(root: &Path) -> Result<Vec<RawDocument>> {
    if !root.is_dir() {
        return Err(CliError::Config(format!(
            "Articles directory not found: {}",
            root.display()
        )));
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let text = std::fs::read_to_string(entry.path())?;
        let key = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        debug!(key = %key, bytes = text.len(), "discovered document");
        sources.push(RawDocument { key, text });
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collects_markdown_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/b.md"), "beta").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let docs = collect_documents(dir.path()).unwrap();
        let keys: Vec<&str> = docs.iter().map(|d| d.key.as_str()).collect();

        assert_eq!(keys, vec!["a.md", "nested/b.md"]);
        assert_eq!(docs[0].text, "alpha");
    }

    #[test]
    fn test_empty_directory_yields_no_documents() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_documents(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = collect_documents(Path::new("/nonexistent/articles"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
