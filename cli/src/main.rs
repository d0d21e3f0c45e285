//! CLI entrypoint for sportify
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sportify_application::{GenerateBriefingUseCase, NoProgress, ProgressNotifier};
use sportify_domain::briefing::catalog;
use sportify_domain::{DomainError, OutputFormat, Size, default_topics};
use sportify_infrastructure::{
    Compositor, ConfigLoader, ConfiguredImageGateway, FileConfig, GeminiBriefingGateway,
    GeminiClient, ImageLoader,
};
use sportify_presentation::config::default_history_path;
use sportify_presentation::{
    BriefingFormatter, BriefingRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter,
    ReplConfig, SimpleProgress,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting sportify");

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", ConfigLoader::render(&config)?);
        return Ok(());
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
    );
    output.apply_color();

    let mut topic_catalog: Vec<String> = config
        .topics
        .catalog
        .iter()
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .collect();
    if topic_catalog.is_empty() {
        topic_catalog = default_topics();
    }

    if cli.list_topics {
        print!("{}", ConsoleFormatter::format_topics(&topic_catalog, &[]));
        return Ok(());
    }

    // === Dependency Injection ===
    let gemini = config
        .gemini
        .to_provider_config(|name| std::env::var(name).ok());
    let client = GeminiClient::new(&gemini).context("Failed to build HTTP client")?;
    let briefing = Arc::new(GeminiBriefingGateway::new(client.clone(), gemini.model.clone()));
    let image = Arc::new(ConfiguredImageGateway::from_config(
        &config.image.to_provider_config(),
        &client,
    ));
    info!(model = %gemini.model, strategy = %image.strategy(), "Gateways ready");

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config
                .repl
                .history_file
                .as_ref()
                .map(PathBuf::from)
                .or_else(default_history_path),
        };
        let mut repl = BriefingRepl::new(briefing, image, topic_catalog)
            .with_config(repl_config)
            .with_format(output.format);

        repl.run().await?;
        return Ok(());
    }

    // Single briefing mode
    let topics = resolve_topics(&topic_catalog, &cli.topic)?;
    let query = cli.query.clone().unwrap_or_default();
    if topics.is_empty() && query.trim().is_empty() {
        bail!(
            "{} Use --topic, a query argument, or --interactive.",
            DomainError::EmptyRequest
        );
    }

    let use_case = GenerateBriefingUseCase::new(briefing, image);
    let progress: Box<dyn ProgressNotifier> = if cli.quiet || output.format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let result = use_case.submit(&topics, &query, progress.as_ref()).await?;
    println!("{}", ConsoleFormatter.format_as(&result, output.format));

    // Optional composited image
    if let Some(path) = &cli.image_out {
        let target = Size::new(
            cli.width.unwrap_or(config.compositor.width),
            cli.height.unwrap_or(config.compositor.height),
        );
        let loaded = ImageLoader::new(client.http().clone())
            .load(&result.image)
            .await;
        let canvas = Compositor::new(config.compositor.watermark_band).paint(loaded, target);
        canvas
            .save(path)
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        info!(path = %path.display(), "Composited image written");
    }

    Ok(())
}

/// Load and validate configuration according to the CLI flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    Ok(config)
}

/// Map `--topic` values (names or 1-based numbers) onto catalog entries
fn resolve_topics(topic_catalog: &[String], keys: &[String]) -> Result<Vec<String>> {
    let mut topics: Vec<String> = Vec::new();
    for key in keys {
        let name = catalog::lookup(topic_catalog, key)
            .ok_or_else(|| DomainError::UnknownTopic(key.clone()))?;
        if !topics.iter().any(|t| t == name) {
            topics.push(name.to_string());
        }
    }
    Ok(topics)
}
