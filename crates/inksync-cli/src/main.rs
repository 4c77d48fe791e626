//! inksync - publish Markdown articles to a blogging platform.

use clap::Parser;
use inksync_cli::commands;
use inksync_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> inksync_cli::Result<()> {
    // Logs go to stderr so report output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format and color
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Publish(args) => {
            commands::execute_publish(args, &config, &formatter).await?;
        }
        Command::Check(args) => {
            commands::execute_check(args, &config, &formatter).await?;
        }
        Command::Whoami => {
            commands::execute_whoami(&config, &formatter).await?;
        }
        Command::Status => {
            commands::execute_status(&config, &formatter).await?;
        }
    }

    Ok(())
}
