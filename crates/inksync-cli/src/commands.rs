//! Command execution.

use crate::cli::{CheckArgs, PublishArgs};
use crate::config::{Config, MappingConfig};
use crate::discovery;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use inksync_client::{ArticleClient, ClientConfig};
use inksync_domain::traits::{ArticleApi, BlobStore};
use inksync_domain::{ApiError, ArticleId};
use inksync_extract::{ExtractConfig, MetadataExtractor};
use inksync_publisher::{PublisherConfig, RawDocument, Reconciler};
use inksync_store::{FileBlobStore, MappingStore, S3BlobStore, S3Config};

/// Run the reconciliation over the articles directory.
pub async fn execute_publish(
    args: PublishArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let client = connect(config)?;
    let dir = args.dir.unwrap_or_else(|| config.articles_dir.clone());
    let sources = discovery::collect_documents(&dir)?;

    if sources.is_empty() {
        println!(
            "{}",
            formatter.warning(&format!("No Markdown files found in {}", dir.display()))
        );
        return Ok(());
    }

    let extractor = MetadataExtractor::new(extract_config(config)?);

    match &config.mapping {
        MappingConfig::File { path } => {
            publish_with(
                client,
                FileBlobStore::new(path),
                &extractor,
                config,
                &sources,
                args.dry_run,
                formatter,
            )
            .await
        }
        MappingConfig::S3 { bucket, key, region, endpoint } => {
            let blob = s3_blob(bucket, key, region, endpoint)?;
            publish_with(client, blob, &extractor, config, &sources, args.dry_run, formatter)
                .await
        }
    }
}

/// Fetch one article by id and report whether it exists.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let client = connect(config)?;
    let id = ArticleId::new(args.id);

    match client.fetch(&id).await {
        Ok(article) => println!("{}", formatter.format_article(&article)),
        Err(ApiError::NotFound(id)) => {
            println!(
                "{}",
                formatter.warning(&format!("Article {} does not exist", id))
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Show the owner of the configured API token.
pub async fn execute_whoami(config: &Config, formatter: &Formatter) -> Result<()> {
    let client = connect(config)?;
    let user = client.me().await?;
    println!("{}", formatter.format_user(&user));
    Ok(())
}

/// List the recorded document-to-article mapping.
pub async fn execute_status(config: &Config, formatter: &Formatter) -> Result<()> {
    match &config.mapping {
        MappingConfig::File { path } => status_with(FileBlobStore::new(path), formatter).await,
        MappingConfig::S3 { bucket, key, region, endpoint } => {
            status_with(s3_blob(bucket, key, region, endpoint)?, formatter).await
        }
    }
}

async fn publish_with<B: BlobStore>(
    client: ArticleClient,
    blob: B,
    extractor: &MetadataExtractor,
    config: &Config,
    sources: &[RawDocument],
    dry_run: bool,
    formatter: &Formatter,
) -> Result<()> {
    let mapping = MappingStore::load(blob).await?;
    let mut reconciler = Reconciler::new(
        client,
        mapping,
        PublisherConfig {
            private: config.private,
        },
    );

    if dry_run {
        for source in sources {
            let line = match extractor.extract(&source.key, &source.text) {
                Ok(doc) => match reconciler.known_id(&doc) {
                    Some(id) => formatter.info(&format!("{}: would update {}", source.key, id)),
                    None => formatter.info(&format!("{}: would create", source.key)),
                },
                Err(e) => formatter.warning(&format!("{}: skipped ({})", source.key, e)),
            };
            println!("{}", line);
        }
        return Ok(());
    }

    let report = reconciler.run(extractor, sources).await?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

async fn status_with<B: BlobStore>(blob: B, formatter: &Formatter) -> Result<()> {
    let mapping = MappingStore::load(blob).await?;
    println!("{}", formatter.format_mapping(mapping.entries())?);
    Ok(())
}

/// Build the API client; fails fast when the token is absent.
fn connect(config: &Config) -> Result<ArticleClient> {
    let token = Config::token_from_env()?;
    Ok(ArticleClient::new(
        ClientConfig::new(token).with_base_url(&config.api_base_url),
    ))
}

fn extract_config(config: &Config) -> Result<ExtractConfig> {
    let extract = ExtractConfig {
        default_tags: config.default_tags.clone(),
        require_title: config.require_title,
    };
    extract.validate().map_err(CliError::Config)?;
    Ok(extract)
}

fn s3_blob(
    bucket: &str,
    key: &str,
    region: &str,
    endpoint: &Option<String>,
) -> Result<S3BlobStore> {
    Ok(S3BlobStore::from_env(S3Config {
        bucket: bucket.to_string(),
        key: key.to_string(),
        region: region.to_string(),
        endpoint: endpoint.clone(),
    })?)
}
