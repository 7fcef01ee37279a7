//! CLI interface for the preprocessing service

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cail-etl")]
#[command(about = "Text preprocessing for resumes and job offers")]
#[command(long_about = "Clean, normalize and analyze candidate and job offer fields into canonical texts ready for vectorization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preprocess candidate records
    Candidate {
        /// JSON or JSON lines file, or `-` for stdin
        input: String,

        /// Output format: json, pretty, console
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Skip linguistic analysis
        #[arg(long)]
        no_nlp: bool,
    },

    /// Preprocess job offer records
    Offer {
        /// JSON or JSON lines file, or `-` for stdin
        input: String,

        /// Output format: json, pretty, console
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Skip linguistic analysis
        #[arg(long)]
        no_nlp: bool,
    },

    /// Run the linguistic analyzer on a text
    Analyze {
        text: String,

        /// Also print part-of-speech tags
        #[arg(long)]
        pos: bool,

        /// Output format: json, pretty, console
        #[arg(short, long, default_value = "console")]
        format: String,
    },

    /// Semantic similarity between two texts
    Similarity {
        first: String,
        second: String,
    },

    /// Start the HTTP service
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides the config file and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Load the linguistic backend before accepting requests
        #[arg(long)]
        preload: bool,
    },

    /// Vector model management commands
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ModelAction {
    /// Download the vector model
    Download {
        /// HuggingFace repo ID (defaults to the configured model)
        model: Option<String>,

        /// Force re-download if model exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show model information
    Info {
        /// HuggingFace repo ID (defaults to the configured model)
        model: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "pretty" => Ok(OutputFormat::Pretty),
        "console" => Ok(OutputFormat::Console),
        _ => Err(format!(
            "Invalid output format: {}. Supported: json, pretty, console",
            format
        )),
    }
}
