//! Linguistic analysis over a lazily loaded backend

use crate::catalogs::entities::entity_description;
use crate::config::{BackendKind, Config};
use crate::error::{EtlError, Result};
use crate::nlp::backend::{BackendLoader, LinguisticBackend, ParsedDoc, PartOfSpeech};
use crate::nlp::model_manager::ModelManager;
use crate::nlp::spanish::SpanishAnalyzer;
use crate::nlp::vectors::VectorBackend;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Key phrases this short or shorter are dropped
const MIN_KEY_PHRASE_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticAnalysis {
    pub original: String,
    pub lemmatized: String,
    pub entities: Vec<Entity>,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub key_phrases: Vec<String>,
}

impl LinguisticAnalysis {
    fn empty(original: &str) -> Self {
        Self {
            original: original.to_string(),
            ..Default::default()
        }
    }
}

/// Builds the configured backend
pub struct ModelLoader {
    kind: BackendKind,
    models_dir: PathBuf,
    vector_model: String,
}

impl ModelLoader {
    pub fn new(kind: BackendKind, models_dir: PathBuf, vector_model: impl Into<String>) -> Self {
        Self {
            kind,
            models_dir,
            vector_model: vector_model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.nlp.backend,
            config.models_dir().clone(),
            config.nlp.vector_model.clone(),
        )
    }
}

impl BackendLoader for ModelLoader {
    fn load(&self) -> Result<Arc<dyn LinguisticBackend>> {
        let analyzer = SpanishAnalyzer::new()?;

        match self.kind {
            BackendKind::Lexical => Ok(Arc::new(analyzer)),
            BackendKind::Vectors => {
                let manager = ModelManager::new(&self.models_dir)?;
                let model_path = manager.ensure_model_available(&self.vector_model)?;
                Ok(Arc::new(VectorBackend::load(&model_path, analyzer)?))
            }
        }
    }
}

/// Adapter over a linguistic backend that is loaded on first use.
///
/// Concurrent first callers wait on a single load. A failed load leaves
/// nothing cached, so the next call tries again.
pub struct NlpProcessor {
    loader: Box<dyn BackendLoader>,
    backend: Mutex<Option<Arc<dyn LinguisticBackend>>>,
}

impl NlpProcessor {
    pub fn new(loader: impl BackendLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            backend: Mutex::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ModelLoader::from_config(config))
    }

    pub fn is_loaded(&self) -> bool {
        self.backend
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Load the backend now instead of on first use
    pub fn warm_up(&self) -> Result<()> {
        self.backend().map(|_| ())
    }

    fn backend(&self) -> Result<Arc<dyn LinguisticBackend>> {
        let mut slot = self.backend.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(backend) = slot.as_ref() {
            return Ok(Arc::clone(backend));
        }

        let start_time = Instant::now();
        info!("Loading linguistic backend");

        let backend = self.loader.load().map_err(|e| match e {
            EtlError::ModelLoading(_) => e,
            other => EtlError::ModelLoading(other.to_string()),
        })?;

        info!("Loaded {} backend in {:.2?}", backend.name(), start_time.elapsed());
        *slot = Some(Arc::clone(&backend));
        Ok(backend)
    }

    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        Ok(self.backend()?.parse(text))
    }

    /// Full analysis of `text`; blank text gives an empty analysis without loading
    pub fn process(&self, text: &str) -> Result<LinguisticAnalysis> {
        if text.trim().is_empty() {
            return Ok(LinguisticAnalysis::empty(text));
        }

        let doc = self.parse(text)?;

        let mut nouns = OrderedSet::default();
        let mut verbs = OrderedSet::default();
        for token in doc.tokens.iter().filter(|t| !t.is_stop) {
            match token.pos {
                PartOfSpeech::Noun => nouns.insert(token.lemma.to_lowercase()),
                PartOfSpeech::Verb => verbs.insert(token.lemma.to_lowercase()),
                _ => {}
            }
        }

        let analysis = LinguisticAnalysis {
            original: text.to_string(),
            lemmatized: lemmatized_text(&doc),
            entities: entities_of(&doc),
            nouns: nouns.into_vec(),
            verbs: verbs.into_vec(),
            key_phrases: key_phrases(&doc),
        };

        debug!(
            "Analyzed {} tokens: {} entities, {} key phrases",
            doc.tokens.len(),
            analysis.entities.len(),
            analysis.key_phrases.len()
        );

        Ok(analysis)
    }

    /// Lower-cased lemmas of content tokens, space separated
    pub fn lemmatize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(lemmatized_text(&self.parse(text)?))
    }

    pub fn extract_entities(&self, text: &str) -> Result<Vec<Entity>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(entities_of(&self.parse(text)?))
    }

    /// Every token with its part of speech
    pub fn get_pos_tags(&self, text: &str) -> Result<Vec<(String, PartOfSpeech)>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .parse(text)?
            .tokens
            .into_iter()
            .map(|token| (token.text, token.pos))
            .collect())
    }

    /// Similarity in [0, 1]; 0.0 when either text is empty
    pub fn get_similarity(&self, text1: &str, text2: &str) -> Result<f32> {
        if text1.trim().is_empty() || text2.trim().is_empty() {
            return Ok(0.0);
        }

        let backend = self.backend()?;
        let doc1 = backend.parse(text1);
        let doc2 = backend.parse(text2);

        let score = match backend.similarity(&doc1, &doc2) {
            Some(score) => score,
            None => {
                warn!(
                    "Backend {} has no word vectors; using lemma overlap for similarity",
                    backend.name()
                );
                lemma_overlap(&doc1, &doc2)
            }
        };

        Ok(if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) })
    }
}

/// Insertion-ordered set of strings
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn insert(&mut self, item: String) {
        if self.seen.insert(item.clone()) {
            self.items.push(item);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

fn lemmatized_text(doc: &ParsedDoc) -> String {
    doc.tokens
        .iter()
        .filter(|t| t.is_content())
        .map(|t| t.lemma.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn entities_of(doc: &ParsedDoc) -> Vec<Entity> {
    doc.entities
        .iter()
        .map(|span| Entity {
            text: span.text.clone(),
            label: span.label.clone(),
            description: entity_description(&span.label),
        })
        .collect()
}

/// Noun chunks rendered as the lemmas of their content tokens
fn key_phrases(doc: &ParsedDoc) -> Vec<String> {
    let mut phrases = OrderedSet::default();

    for chunk in &doc.noun_chunks {
        let phrase = doc
            .chunk_tokens(chunk)
            .iter()
            .filter(|t| t.is_content())
            .map(|t| t.lemma.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        if phrase.chars().count() > MIN_KEY_PHRASE_CHARS {
            phrases.insert(phrase);
        }
    }

    phrases.into_vec()
}

/// Jaccard similarity of the content lemma sets
fn lemma_overlap(a: &ParsedDoc, b: &ParsedDoc) -> f32 {
    let lemmas = |doc: &ParsedDoc| -> HashSet<String> {
        doc.tokens
            .iter()
            .filter(|t| t.is_content())
            .map(|t| t.lemma.to_lowercase())
            .collect()
    };

    let (set_a, set_b) = (lemmas(a), lemmas(b));
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    set_a.intersection(&set_b).count() as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        loads: Arc<AtomicUsize>,
        failures_left: Arc<AtomicUsize>,
    }

    impl BackendLoader for CountingLoader {
        fn load(&self) -> Result<Arc<dyn LinguisticBackend>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.failures_left.load(Ordering::SeqCst) > 0 {
                self.failures_left.fetch_sub(1, Ordering::SeqCst);
                return Err(EtlError::Network("offline".to_string()));
            }
            Ok(Arc::new(SpanishAnalyzer::new()?))
        }
    }

    fn counting(failures: usize) -> (NlpProcessor, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let processor = NlpProcessor::new(CountingLoader {
            loads: Arc::clone(&loads),
            failures_left: Arc::new(AtomicUsize::new(failures)),
        });
        (processor, loads)
    }

    fn lexical() -> NlpProcessor {
        NlpProcessor::new(ModelLoader::new(
            BackendKind::Lexical,
            PathBuf::from("unused"),
            "unused",
        ))
    }

    #[test]
    fn test_blank_input_does_not_load() {
        let (processor, loads) = counting(0);

        let analysis = processor.process("   ").unwrap();
        assert_eq!(analysis.original, "   ");
        assert!(analysis.lemmatized.is_empty());
        assert!(analysis.key_phrases.is_empty());
        assert_eq!(processor.get_similarity("", "algo").unwrap(), 0.0);
        assert!(processor.lemmatize("").unwrap().is_empty());
        assert!(processor.extract_entities("").unwrap().is_empty());
        assert!(processor.get_pos_tags("").unwrap().is_empty());

        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert!(!processor.is_loaded());
    }

    #[test]
    fn test_backend_loaded_once() {
        let (processor, loads) = counting(0);
        processor.process("Desarrollador de software").unwrap();
        processor.lemmatize("Gestión de proyectos").unwrap();
        processor.warm_up().unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(processor.is_loaded());
    }

    #[test]
    fn test_failed_load_is_retried() {
        let (processor, loads) = counting(1);

        let first = processor.process("Analista de datos");
        assert!(matches!(first, Err(EtlError::ModelLoading(_))));
        assert!(!processor.is_loaded());

        assert!(processor.process("Analista de datos").is_ok());
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_calls_share_one_load() {
        let (processor, loads) = counting(0);
        let processor = Arc::new(processor);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let processor = Arc::clone(&processor);
                std::thread::spawn(move || processor.lemmatize("equipos de trabajo").unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_process_fields() {
        let processor = lexical();
        let analysis = processor
            .process("Desarrollé aplicaciones web para el Banco Pichincha en Quito. Desarrollé aplicaciones móviles.")
            .unwrap();

        assert!(analysis.lemmatized.contains("desarrollar"));
        assert!(analysis.lemmatized.contains("aplicación"));
        assert!(!analysis.lemmatized.contains(" el "));
        assert!(analysis.verbs.contains(&"desarrollar".to_string()));
        assert_eq!(analysis.verbs.iter().filter(|v| *v == "desarrollar").count(), 1);
        assert!(analysis.nouns.contains(&"aplicación".to_string()));

        let org = analysis
            .entities
            .iter()
            .find(|e| e.text == "Banco Pichincha")
            .unwrap();
        assert_eq!(org.label, "ORG");
        assert_eq!(org.description, "Organización");
        assert!(analysis
            .entities
            .iter()
            .any(|e| e.text == "Quito" && e.description == "Lugar"));
    }

    #[test]
    fn test_key_phrases_are_unique_and_longer_than_two_chars() {
        let processor = lexical();
        let analysis = processor
            .process("el equipo de datos y el equipo de ventas, un TI")
            .unwrap();

        let unique: HashSet<&String> = analysis.key_phrases.iter().collect();
        assert_eq!(unique.len(), analysis.key_phrases.len());
        assert!(analysis.key_phrases.contains(&"equipo".to_string()));
        assert!(analysis.key_phrases.iter().all(|p| p.chars().count() > 2));
    }

    #[test]
    fn test_pos_tags_cover_every_token() {
        let processor = lexical();
        let tags = processor.get_pos_tags("con Python, SQL").unwrap();
        assert_eq!(
            tags,
            vec![
                ("con".to_string(), PartOfSpeech::Adp),
                ("Python".to_string(), PartOfSpeech::Propn),
                (",".to_string(), PartOfSpeech::Punct),
                ("SQL".to_string(), PartOfSpeech::Propn),
            ]
        );
    }

    #[test]
    fn test_similarity_fallback_is_bounded() {
        let processor = lexical();
        let same = processor
            .get_similarity("desarrollo de software", "desarrollo de software")
            .unwrap();
        let different = processor
            .get_similarity("desarrollo de software", "cocina peruana")
            .unwrap();

        assert!((same - 1.0).abs() < 1e-6);
        assert_eq!(different, 0.0);
        assert!((0.0..=1.0).contains(&same));
    }
}
