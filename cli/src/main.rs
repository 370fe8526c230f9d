//! CLI entrypoint for somdet-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use somdet_application::{ConversationController, SubmitOutcome, SubmitRejection};
use somdet_domain::{Model, OutputFormat};
use somdet_infrastructure::{ConfigLoader, FileConfig, GeminiReplyFetcher};
use somdet_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig, SpinnerProgress};
use std::sync::Arc;
use tracing::info;
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
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(model) = &cli.model {
        config.gemini.model = Model::from(model.as_str());
    }
    config.validate().context("Invalid configuration")?;

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .unwrap_or(config.output.format),
        color: config.output.color && !cli.no_color,
    };
    let repl = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
    };

    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let fetcher = Arc::new(GeminiReplyFetcher::new(config.gemini.to_settings())?);
    info!("Starting somdet-chat with model {}", fetcher.model());
    let controller = ConversationController::new(fetcher);

    // Chat mode
    let Some(question) = cli.question else {
        ChatRepl::new(controller).with_config(repl).run().await?;
        return Ok(());
    };

    // Single question mode
    let outcome = if repl.show_progress {
        let progress = SpinnerProgress::new();
        controller.submit_with_progress(&question, &progress).await
    } else {
        controller.submit(&question).await
    };

    let reply = match outcome {
        SubmitOutcome::Replied(turn) => turn,
        SubmitOutcome::Rejected(SubmitRejection::EmptyInput) => {
            bail!("Question cannot be empty. Omit it to start the interactive chat.")
        }
        SubmitOutcome::Rejected(SubmitRejection::AwaitingReply) => {
            bail!("A reply is already outstanding")
        }
    };

    match output.format {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_turn(&reply)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&controller.turns())),
    }

    Ok(())
}
