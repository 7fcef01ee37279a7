//! Vector model acquisition from the Hugging Face Hub

use crate::error::{EtlError, Result};
use chrono::{DateTime, Local};
use hf_hub::api::sync::Api;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Files a Model2Vec model cannot load without
const REQUIRED_FILES: &[&str] = &["model.safetensors", "tokenizer.json", "config.json"];

const OPTIONAL_FILES: &[&str] = &["README.md"];

/// Local state of a vector model
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub repo_id: String,
    pub path: PathBuf,
    pub downloaded: bool,
    pub size_bytes: u64,
    pub missing_files: Vec<String>,
    /// Modification time of the weights file
    pub updated_at: Option<DateTime<Local>>,
}

/// Downloads and locates vector models under a models directory
pub struct ModelManager {
    models_dir: PathBuf,
}

impl ModelManager {
    pub fn new(models_dir: impl Into<PathBuf>) -> Result<Self> {
        let models_dir = models_dir.into();

        if !models_dir.exists() {
            fs::create_dir_all(&models_dir).map_err(|e| {
                EtlError::ModelLoading(format!("Failed to create models directory: {}", e))
            })?;
        }

        Ok(Self { models_dir })
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Local directory for a repo id: `owner/name` becomes `owner--name`
    pub fn model_dir(&self, repo_id: &str) -> PathBuf {
        self.models_dir.join(repo_id.replace('/', "--"))
    }

    pub fn is_downloaded(&self, repo_id: &str) -> bool {
        self.missing_files(repo_id).is_empty()
    }

    fn missing_files(&self, repo_id: &str) -> Vec<String> {
        let model_dir = self.model_dir(repo_id);
        REQUIRED_FILES
            .iter()
            .filter(|file| !model_dir.join(file).is_file())
            .map(|file| file.to_string())
            .collect()
    }

    pub fn status(&self, repo_id: &str) -> ModelStatus {
        let path = self.model_dir(repo_id);
        let missing_files = self.missing_files(repo_id);

        let size_bytes = fs::read_dir(&path)
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .filter_map(|entry| entry.metadata().ok())
                    .filter(|metadata| metadata.is_file())
                    .map(|metadata| metadata.len())
                    .sum()
            })
            .unwrap_or(0);

        let updated_at = fs::metadata(path.join(REQUIRED_FILES[0]))
            .and_then(|metadata| metadata.modified())
            .ok()
            .map(DateTime::<Local>::from);

        ModelStatus {
            repo_id: repo_id.to_string(),
            path,
            downloaded: missing_files.is_empty(),
            size_bytes,
            missing_files,
            updated_at,
        }
    }

    /// Download a model's files into the models directory.
    ///
    /// Already present models are kept unless `force` is set.
    pub fn download_model(&self, repo_id: &str, force: bool) -> Result<PathBuf> {
        let model_dir = self.model_dir(repo_id);

        if !force && self.is_downloaded(repo_id) {
            debug!("Model {} already present at {}", repo_id, model_dir.display());
            return Ok(model_dir);
        }

        info!("Downloading vector model: {}", repo_id);

        fs::create_dir_all(&model_dir).map_err(|e| {
            EtlError::ModelLoading(format!("Failed to create model directory: {}", e))
        })?;

        let api = Api::new()?;
        let repo = api.model(repo_id.to_string());

        for file in REQUIRED_FILES.iter().chain(OPTIONAL_FILES) {
            match repo.get(file) {
                Ok(cached_path) => {
                    fs::copy(&cached_path, model_dir.join(file)).map_err(|e| {
                        EtlError::ModelLoading(format!("Failed to copy {}: {}", file, e))
                    })?;
                    info!("Downloaded: {}", file);
                }
                Err(e) if OPTIONAL_FILES.contains(file) => {
                    warn!("Optional file {} not found: {}", file, e);
                }
                Err(e) => {
                    return Err(EtlError::ModelNotFound(format!(
                        "{} (required file {} unavailable: {})",
                        repo_id, file, e
                    )));
                }
            }
        }

        info!("Vector model {} downloaded successfully", repo_id);
        Ok(model_dir)
    }

    /// Path of a usable model, downloading it first when absent
    pub fn ensure_model_available(&self, repo_id: &str) -> Result<PathBuf> {
        if self.is_downloaded(repo_id) {
            return Ok(self.model_dir(repo_id));
        }

        self.download_model(repo_id, false)
    }
}
