//! Error handling for the preprocessing service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// Convert anyhow errors (raised by the Model2Vec loader) to our error type
impl From<anyhow::Error> for EtlError {
    fn from(err: anyhow::Error) -> Self {
        EtlError::ModelLoading(err.to_string())
    }
}

/// Convert Hugging Face Hub errors to our error type
impl From<hf_hub::api::sync::ApiError> for EtlError {
    fn from(err: hf_hub::api::sync::ApiError) -> Self {
        EtlError::Network(err.to_string())
    }
}
