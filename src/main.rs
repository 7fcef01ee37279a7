//! cail-etl: text preprocessing for resumes and job offers

use cail_etl::cli::{self, Cli, Commands, ConfigAction, ModelAction};
use cail_etl::config::Config;
use cail_etl::error::{EtlError, Result};
use cail_etl::input::InputManager;
use cail_etl::nlp::{ModelManager, NlpProcessor};
use cail_etl::output::{formatter_for, OutputFormat};
use cail_etl::processing::{CandidateInput, OfferInput, PreprocessingPipeline};
use cail_etl::server;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use serde_json::Value;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Candidate { input, format, no_nlp } => {
            let output_format = cli::parse_output_format(&format).map_err(EtlError::InvalidInput)?;
            if no_nlp {
                config.nlp.enabled = false;
            }

            let records = InputManager::new().read_records(&input)?;
            let pipeline = PreprocessingPipeline::new(&config);
            let results = process_batch(records, "candidates", |record| {
                let candidate = CandidateInput::from_value(record)?;
                pipeline.process_candidate(&candidate)
            })?;

            let formatter = formatter_for(output_format, use_colors(output_format));
            println!("{}", formatter.format_candidates(&results)?);
        }

        Commands::Offer { input, format, no_nlp } => {
            let output_format = cli::parse_output_format(&format).map_err(EtlError::InvalidInput)?;
            if no_nlp {
                config.nlp.enabled = false;
            }

            let records = InputManager::new().read_records(&input)?;
            let pipeline = PreprocessingPipeline::new(&config);
            let results = process_batch(records, "offers", |record| {
                let offer = OfferInput::from_value(record)?;
                pipeline.process_offer(&offer)
            })?;

            let formatter = formatter_for(output_format, use_colors(output_format));
            println!("{}", formatter.format_offers(&results)?);
        }

        Commands::Analyze { text, pos, format } => {
            let output_format = cli::parse_output_format(&format).map_err(EtlError::InvalidInput)?;
            let processor = NlpProcessor::from_config(&config);

            let analysis = processor.process(&text)?;
            let pos_tags = if pos {
                Some(processor.get_pos_tags(&text)?)
            } else {
                None
            };

            let formatter = formatter_for(output_format, use_colors(output_format));
            println!("{}", formatter.format_analysis(&analysis, pos_tags.as_deref())?);
        }

        Commands::Similarity { first, second } => {
            let processor = NlpProcessor::from_config(&config);
            let similarity = processor.get_similarity(&first, &second)?;
            println!("{:.4}", similarity);
        }

        Commands::Serve { host, port, preload } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = server::resolve_port(port, config.server.port);

            let pipeline = Arc::new(PreprocessingPipeline::new(&config));
            if preload && pipeline.uses_nlp() {
                info!("Preloading linguistic backend");
                pipeline.nlp().warm_up()?;
            }

            println!("🚀 Preprocessing service on http://{}:{}", host, port);
            server::serve(pipeline, &host, port).await?;
        }

        Commands::Model { action } => {
            let model_manager = ModelManager::new(config.models_dir().clone())?;

            match action {
                ModelAction::Download { model, force } => {
                    let repo_id = model.unwrap_or_else(|| config.nlp.vector_model.clone());

                    if !force && model_manager.is_downloaded(&repo_id) {
                        println!("✅ Model '{}' is already downloaded!", repo_id);
                        println!("💡 Use --force to re-download");
                        return Ok(());
                    }

                    println!("⬇️  Downloading model: {}", repo_id);
                    match model_manager.download_model(&repo_id, force) {
                        Ok(model_path) => {
                            println!("✅ Model '{}' downloaded successfully!", repo_id);
                            println!("📁 Location: {}", model_path.display());
                        }
                        Err(e) => {
                            println!("❌ Failed to download model '{}': {}", repo_id, e);
                            return Err(e);
                        }
                    }
                }

                ModelAction::Info { model } => {
                    let repo_id = model.unwrap_or_else(|| config.nlp.vector_model.clone());
                    let status = model_manager.status(&repo_id);

                    println!("📋 Model Information for '{}'\n", status.repo_id);
                    println!("Location: {}", status.path.display());
                    println!(
                        "Status: {}",
                        if status.downloaded { "✅ Downloaded" } else { "⬇️  Available for download" }
                    );
                    println!("Size: {:.1} MB", status.size_bytes as f64 / (1024.0 * 1024.0));
                    if let Some(updated_at) = status.updated_at {
                        println!("Updated: {}", updated_at.format("%Y-%m-%d %H:%M:%S"));
                    }

                    if !status.missing_files.is_empty() {
                        println!("Missing files: {}", status.missing_files.join(", "));
                        println!("\n💡 To download this model, run:");
                        println!("   cail-etl model download {}", status.repo_id);
                    }
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let rendered = toml::to_string_pretty(&config)
                        .map_err(|e| EtlError::Configuration(e.to_string()))?;
                    println!("{}", rendered);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Run `process` over every record, with a progress bar for batches
fn process_batch<T>(
    records: Vec<Value>,
    kind: &str,
    mut process: impl FnMut(Value) -> Result<T>,
) -> Result<Vec<T>> {
    if records.is_empty() {
        return Err(EtlError::InvalidInput(format!("No {} found in input", kind)));
    }

    let progress = (records.len() > 1).then(|| {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(kind.to_string());
        pb
    });

    let mut results = Vec::with_capacity(records.len());
    for record in records {
        results.push(process(record)?);
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    info!("Processed {} {}", results.len(), kind);

    Ok(results)
}

fn use_colors(format: OutputFormat) -> bool {
    format == OutputFormat::Console && std::io::stdout().is_terminal()
}
