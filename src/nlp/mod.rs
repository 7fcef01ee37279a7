//! Linguistic analysis: backends, entity recognition and the lazy adapter

pub mod backend;
pub mod chunker;
pub mod entities;
pub mod model_manager;
pub mod processor;
pub mod spanish;
pub mod vectors;

pub use backend::{BackendLoader, EntitySpan, LinguisticBackend, ParsedDoc, PartOfSpeech, Token};
pub use model_manager::{ModelManager, ModelStatus};
pub use processor::{Entity, LinguisticAnalysis, ModelLoader, NlpProcessor};
pub use spanish::SpanishAnalyzer;
pub use vectors::VectorBackend;
