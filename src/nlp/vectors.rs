//! Model2Vec static embeddings for document similarity

use crate::error::{EtlError, Result};
use crate::nlp::backend::{LinguisticBackend, ParsedDoc};
use crate::nlp::spanish::SpanishAnalyzer;
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::Path;
use std::time::Instant;

/// The Spanish analyzer with a static embedding model for similarity
pub struct VectorBackend {
    analyzer: SpanishAnalyzer,
    model: StaticModel,
    model_name: String,
}

impl VectorBackend {
    pub fn load(model_path: &Path, analyzer: SpanishAnalyzer) -> Result<Self> {
        let start_time = Instant::now();

        info!("Loading Model2Vec embedding model from: {}", model_path.display());

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| EtlError::ModelLoading(format!("Failed to load model: {}", e)))?;

        info!("Model loaded successfully in {:.2?}", start_time.elapsed());

        let model_name = model_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "model2vec".to_string());

        Ok(Self {
            analyzer,
            model,
            model_name: format!("vectors:{}", model_name),
        })
    }

    pub fn encode(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }
}

impl LinguisticBackend for VectorBackend {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn parse(&self, text: &str) -> ParsedDoc {
        self.analyzer.parse(text)
    }

    fn has_vectors(&self) -> bool {
        true
    }

    fn similarity(&self, a: &ParsedDoc, b: &ParsedDoc) -> Option<f32> {
        Some(cosine_similarity(&self.encode(&a.text), &self.encode(&b.text)))
    }
}

/// Cosine similarity; zero for empty, mismatched or zero-norm vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
