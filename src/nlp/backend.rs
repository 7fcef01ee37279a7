//! Linguistic backend seam: parsed document types and the backend traits

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Universal Dependencies coarse part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Det,
    Adp,
    Pron,
    Cconj,
    Sconj,
    Num,
    Punct,
    Sym,
    Space,
    X,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Space => "SPACE",
            PartOfSpeech::X => "X",
        }
    }

    /// Nouns and proper nouns head noun chunks
    pub fn is_nominal(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_space: bool,
    /// Byte offset of the token in the parsed text
    pub offset: usize,
}

impl Token {
    /// Tokens that carry content: not a stopword, punctuation, symbol or whitespace
    pub fn is_content(&self) -> bool {
        !self.is_stop && !self.is_punct && !self.is_space && self.pos != PartOfSpeech::Sym
    }
}

/// Named entity as a token range with a category code
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
    pub tokens: Range<usize>,
}

/// One parse of a text: tokens, entity spans and noun chunks (token ranges)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDoc {
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
    pub noun_chunks: Vec<Range<usize>>,
}

impl ParsedDoc {
    pub fn chunk_tokens(&self, chunk: &Range<usize>) -> &[Token] {
        &self.tokens[chunk.start.min(self.tokens.len())..chunk.end.min(self.tokens.len())]
    }
}

/// A linguistic analyzer able to tokenize, tag, lemmatize and find entities
pub trait LinguisticBackend: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, text: &str) -> ParsedDoc;

    /// Whether `similarity` is backed by distributional vectors
    fn has_vectors(&self) -> bool;

    /// Vector similarity between two parses; `None` without vectors
    fn similarity(&self, a: &ParsedDoc, b: &ParsedDoc) -> Option<f32>;
}

/// Produces the backend on first use
pub trait BackendLoader: Send + Sync {
    fn load(&self) -> Result<Arc<dyn LinguisticBackend>>;
}
