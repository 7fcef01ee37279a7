//! Text preprocessing for resumes and job offers ahead of vectorization

pub mod catalogs;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod nlp;
pub mod output;
pub mod processing;
pub mod server;

pub use config::Config;
pub use error::{EtlError, Result};
pub use processing::PreprocessingPipeline;
