//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the API bearer token.
pub const TOKEN_ENV: &str = "INKSYNC_API_TOKEN";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Directory holding the Markdown articles
    #[serde(default = "default_articles_dir")]
    pub articles_dir: PathBuf,

    /// Tags applied to documents that embed none
    #[serde(default = "default_tags")]
    pub default_tags: Vec<String>,

    /// Refuse documents without an explicit embedded title
    #[serde(default)]
    pub require_title: bool,

    /// Publish articles as private
    #[serde(default)]
    pub private: bool,

    /// Where the document-to-article mapping lives
    #[serde(default)]
    pub mapping: MappingConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Mapping blob location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MappingConfig {
    /// A local file
    File {
        /// File path
        path: PathBuf,
    },
    /// One object in an S3-compatible bucket
    S3 {
        /// Bucket name
        bucket: String,
        /// Object key
        key: String,
        /// Bucket region
        region: String,
        /// Custom endpoint for S3-compatible services
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },
}

impl Default for MappingConfig {
    fn default() -> Self {
        MappingConfig::File {
            path: PathBuf::from("inksync-mapping.json"),
        }
    }
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".inksync").join("config.toml"))
    }

    /// Load configuration from the given file, or the default location.
    ///
    /// A missing file at the default location yields the default
    /// configuration; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::path()?, false),
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else if explicit {
            Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )))
        } else {
            // First run: materialize the default config, best effort
            let config = Self::default();
            config.save().ok();
            Ok(config)
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Read the API token from the environment.
    pub fn token_from_env() -> Result<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(CliError::MissingToken)
    }

    fn validate(&self) -> Result<()> {
        if self.default_tags.is_empty() {
            return Err(CliError::Config(
                "default_tags must contain at least one tag".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            articles_dir: default_articles_dir(),
            default_tags: default_tags(),
            require_title: false,
            private: false,
            mapping: MappingConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_api_base_url() -> String {
    inksync_client::DEFAULT_BASE_URL.to_string()
}

fn default_articles_dir() -> PathBuf {
    PathBuf::from("articles")
}

fn default_tags() -> Vec<String> {
    vec!["blog".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
