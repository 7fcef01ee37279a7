//! Configuration management for the preprocessing service

use crate::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub nlp: NlpConfig,
    pub cleaning: CleaningConfig,
    pub normalization: NormalizationConfig,
    pub pipeline: PipelineConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Run the linguistic backend on summaries and descriptions
    pub enabled: bool,
    pub backend: BackendKind,
    pub models_dir: PathBuf,
    /// Hugging Face repo id of the Model2Vec model used by the `vectors` backend
    pub vector_model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Rule-based Spanish analyzer, no download required
    Lexical,
    /// Rule-based analyzer plus Model2Vec vectors for similarity
    Vectors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    pub markup_parser: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationConfig {
    pub remove_accents: bool,
    pub expand_abbreviations: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub max_key_phrases_in_text: usize,
    pub description_max_chars: usize,
    pub map_skill_aliases: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cail-etl")
            .join("models");

        Self {
            nlp: NlpConfig {
                enabled: true,
                backend: BackendKind::Lexical,
                models_dir,
                vector_model: "minishlab/potion-multilingual-128M".to_string(),
            },
            cleaning: CleaningConfig {
                markup_parser: true,
            },
            normalization: NormalizationConfig {
                remove_accents: false,
                expand_abbreviations: false,
            },
            pipeline: PipelineConfig {
                max_key_phrases_in_text: 10,
                description_max_chars: 500,
                map_skill_aliases: false,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or from the default location.
    ///
    /// The default file is created with default values when it does not exist
    /// yet; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::from_file(&config_path)
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EtlError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| EtlError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| EtlError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cail-etl")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.nlp.models_dir
    }
}
