//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use inksync_domain::{ArticleId, AuthenticatedUser, PublishOutcome, RemoteArticle};
use inksync_publisher::RunReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a run report.
    pub fn format_report(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(Self::format_report_quiet(report)),
        }
    }

    fn format_report_table(&self, report: &RunReport) -> String {
        if report.entries.is_empty() {
            return self.colorize("No documents processed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Outcome", "Detail"]);

        for entry in &report.entries {
            let (outcome, detail) = match &entry.outcome {
                PublishOutcome::Created { id } => ("created", id.to_string()),
                PublishOutcome::Updated { id } => ("updated", id.to_string()),
                PublishOutcome::Failed { status, detail } => {
                    let detail = match status {
                        Some(status) => format!("HTTP {}: {}", status, detail),
                        None => detail.clone(),
                    };
                    ("failed", detail)
                }
            };
            builder.push_record([&entry.key, outcome, &detail]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.report_footer(report))
    }

    fn format_report_quiet(report: &RunReport) -> String {
        report
            .entries
            .iter()
            .map(|e| format!("{}\t{}", e.key, e.outcome.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn report_footer(&self, report: &RunReport) -> String {
        if report.is_clean() {
            self.success(&report.summary())
        } else {
            self.error(&report.summary())
        }
    }

    /// Format the mapping entries for the status command.
    pub fn format_mapping<'a>(
        &self,
        entries: impl Iterator<Item = (&'a str, &'a ArticleId)>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = entries
                    .map(|(k, v)| (k.to_string(), v.as_str().into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Document", "Article id"]);
                let mut empty = true;
                for (key, id) in entries {
                    empty = false;
                    builder.push_record([key, id.as_str()]);
                }
                if empty {
                    return Ok(self.colorize("No articles recorded yet.", "yellow"));
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(entries
                .map(|(k, id)| format!("{}\t{}", k, id))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a fetched remote article.
    pub fn format_article(&self, article: &RemoteArticle) -> String {
        match self.format {
            OutputFormat::Quiet => article.id.to_string(),
            _ => {
                let url = article.url.as_deref().unwrap_or("-");
                self.success(&format!(
                    "Article {} exists: \"{}\" ({})",
                    article.id, article.title, url
                ))
            }
        }
    }

    /// Format the token owner.
    pub fn format_user(&self, user: &AuthenticatedUser) -> String {
        match self.format {
            OutputFormat::Quiet => user.id.clone(),
            _ => {
                let count = user
                    .items_count
                    .map(|n| format!(", {} article(s)", n))
                    .unwrap_or_default();
                self.success(&format!("Authenticated as {}{}", user.id, count))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let mut report = RunReport::default();
        report.record(
            "a.md".to_string(),
            PublishOutcome::Created { id: ArticleId::new("X1") },
        );
        report.record(
            "b.md".to_string(),
            PublishOutcome::Failed { status: Some(403), detail: "forbidden".to_string() },
        );
        report
    }

    #[test]
    fn test_table_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("a.md"));
        assert!(output.contains("created"));
        assert!(output.contains("HTTP 403: forbidden"));
        assert!(output.contains("1 created, 0 updated, 1 failed"));
    }

    #[test]
    fn test_json_report() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["entries"][0]["key"], "a.md");
        assert_eq!(parsed["entries"][0]["id"], "X1");
    }

    #[test]
    fn test_quiet_report() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert_eq!(output, "a.md\tcreated\nb.md\tfailed");
    }

    #[test]
    fn test_empty_report_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&RunReport::default()).unwrap();
        assert!(output.contains("No documents processed"));
    }

    #[test]
    fn test_mapping_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let id = ArticleId::new("X1");
        let entries = vec![("a.md", &id)];
        let output = formatter.format_mapping(entries.into_iter()).unwrap();
        assert!(output.contains("a.md"));
        assert!(output.contains("X1"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
