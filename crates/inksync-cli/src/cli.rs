//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// inksync - publish Markdown articles to a blogging platform.
#[derive(Debug, Parser)]
#[command(name = "inksync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per item)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Publish all documents under the articles directory
    Publish(PublishArgs),

    /// Fetch one remote article by id (diagnostic)
    Check(CheckArgs),

    /// Show the owner of the configured API token
    Whoami,

    /// List the recorded document-to-article mapping
    Status,
}

/// Arguments for the publish command.
#[derive(Debug, Parser)]
pub struct PublishArgs {
    /// Articles directory (overrides the configured one)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Show what would happen without calling the remote API
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Remote article id
    pub id: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_command_parsing() {
        let cli = Cli::parse_from(["inksync", "publish", "--dir", "articles", "--dry-run"]);
        match cli.command {
            Command::Publish(args) => {
                assert_eq!(args.dir.unwrap().to_str(), Some("articles"));
                assert!(args.dry_run);
            }
            _ => panic!("Expected Publish command"),
        }
    }

    #[test]
    fn test_check_command_parsing() {
        let cli = Cli::parse_from(["inksync", "check", "0c881395eecffd03bea3"]);
        match cli.command {
            Command::Check(args) => assert_eq!(args.id, "0c881395eecffd03bea3"),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["inksync", "--format", "json", "status"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
