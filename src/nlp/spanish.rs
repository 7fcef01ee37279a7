//! Rule-based Spanish analyzer: tokenizer, tagger and lemmatizer

use crate::catalogs::lexicon::{
    ADJECTIVES, ADPOSITIONS, ADVERBS, AUXILIARIES, COORDINATING_CONJUNCTIONS, DETERMINERS,
    INVARIANT_PLURALS, NOUN_EXCEPTIONS, NOUN_FORMS, NUMBER_WORDS, PRONOUNS,
    SUBORDINATING_CONJUNCTIONS, VERB_FORMS,
};
use crate::catalogs::is_stopword;
use crate::error::Result;
use crate::nlp::backend::{LinguisticBackend, ParsedDoc, PartOfSpeech, Token};
use crate::nlp::chunker::noun_chunks;
use crate::nlp::entities::EntityRecognizer;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Characters tagged SYM rather than PUNCT
const SYMBOLS: &str = "$€£%+=<>#@&*^~|°";

/// Punctuation that ends a sentence
const SENTENCE_BREAKS: &[&str] = &[".", "!", "?", ";", ":", "…"];

const PARTICIPLE_ENDINGS: &[&str] = &["ado", "ada", "ados", "adas", "ido", "ida", "idos", "idas"];

/// Adjective endings that rarely end a noun
const STRONG_ADJECTIVE_ENDINGS: &[&str] = &[
    "oso", "osa", "osos", "osas", "ivo", "iva", "ivos", "ivas", "able", "ables", "ible", "ibles",
];

/// Endings shared by adjectives and nouns; read as adjectives only after a noun
const WEAK_ADJECTIVE_ENDINGS: &[&str] = &[
    "ico", "ica", "icos", "icas", "al", "ales", "ente", "entes", "ante", "antes",
];

/// Verb ending -> infinitive ending, longest first
const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("iendo", "er"),
    ("yendo", "er"),
    ("ando", "ar"),
    ("amos", "ar"),
    ("emos", "er"),
    ("imos", "ir"),
    ("ados", "ar"),
    ("adas", "ar"),
    ("idos", "er"),
    ("idas", "er"),
    ("ado", "ar"),
    ("ada", "ar"),
    ("ido", "er"),
    ("ida", "er"),
    ("ió", "er"),
    ("ó", "ar"),
    ("é", "ar"),
];

/// Feminine adjective ending -> masculine
const FEMININE_ENDINGS: &[(&str, &str)] = &[
    ("osa", "oso"),
    ("iva", "ivo"),
    ("ica", "ico"),
    ("ada", "ado"),
    ("ida", "ido"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum SegmentKind {
    Word,
    Punct,
    Symbol,
    Space,
}

struct Segment<'a> {
    text: &'a str,
    offset: usize,
    kind: SegmentKind,
}

/// What the tagger knows about a word's surroundings
struct TagContext<'a> {
    sentence_start: bool,
    previous: Option<&'a Token>,
    next_capitalized: bool,
}

pub struct SpanishAnalyzer {
    determiners: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    coordinating: HashSet<&'static str>,
    subordinating: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
    auxiliaries: HashMap<&'static str, &'static str>,
    verb_forms: HashMap<&'static str, &'static str>,
    adjectives: HashMap<&'static str, &'static str>,
    noun_forms: HashMap<&'static str, &'static str>,
    noun_exceptions: HashSet<&'static str>,
    invariant_plurals: HashSet<&'static str>,
    recognizer: EntityRecognizer,
}

impl SpanishAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            determiners: DETERMINERS.iter().copied().collect(),
            adpositions: ADPOSITIONS.iter().copied().collect(),
            coordinating: COORDINATING_CONJUNCTIONS.iter().copied().collect(),
            subordinating: SUBORDINATING_CONJUNCTIONS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            number_words: NUMBER_WORDS.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            verb_forms: VERB_FORMS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            noun_forms: NOUN_FORMS.iter().copied().collect(),
            noun_exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            invariant_plurals: INVARIANT_PLURALS.iter().copied().collect(),
            recognizer: EntityRecognizer::new()?,
        })
    }

    /// Tokenize and tag `text`
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let segments = segment(text);
        let mut tokens: Vec<Token> = Vec::with_capacity(segments.len());
        let mut sentence_start = true;

        for (index, seg) in segments.iter().enumerate() {
            let token = match seg.kind {
                SegmentKind::Space => {
                    if seg.text.contains('\n') {
                        sentence_start = true;
                    }
                    Token {
                        text: seg.text.to_string(),
                        lemma: seg.text.to_string(),
                        pos: PartOfSpeech::Space,
                        is_stop: false,
                        is_punct: false,
                        is_space: true,
                        offset: seg.offset,
                    }
                }
                SegmentKind::Punct | SegmentKind::Symbol => {
                    if SENTENCE_BREAKS.contains(&seg.text) {
                        sentence_start = true;
                    }
                    let is_punct = seg.kind == SegmentKind::Punct;
                    Token {
                        text: seg.text.to_string(),
                        lemma: seg.text.to_string(),
                        pos: if is_punct {
                            PartOfSpeech::Punct
                        } else {
                            PartOfSpeech::Sym
                        },
                        is_stop: false,
                        is_punct,
                        is_space: false,
                        offset: seg.offset,
                    }
                }
                SegmentKind::Word => {
                    let context = TagContext {
                        sentence_start,
                        previous: tokens.iter().rev().find(|t| !t.is_space),
                        next_capitalized: segments[index + 1..]
                            .iter()
                            .find(|s| s.kind != SegmentKind::Space)
                            .is_some_and(|s| s.kind == SegmentKind::Word && starts_uppercase(s.text)),
                    };
                    sentence_start = false;
                    self.word_token(seg, &context)
                }
            };
            tokens.push(token);
        }

        tokens
    }

    fn word_token(&self, seg: &Segment<'_>, context: &TagContext<'_>) -> Token {
        let lower = seg.text.to_lowercase();
        let (pos, known_lemma) = self.tag_word(seg.text, &lower, context);
        let lemma = match known_lemma {
            Some(lemma) => lemma.to_string(),
            None => self.lemma_for(seg.text, &lower, pos),
        };

        Token {
            text: seg.text.to_string(),
            lemma,
            pos,
            is_stop: is_stopword(&lower),
            is_punct: false,
            is_space: false,
            offset: seg.offset,
        }
    }

    /// Part of speech for a word, with its lemma when the lexicon knows it
    fn tag_word(
        &self,
        word: &str,
        lower: &str,
        context: &TagContext<'_>,
    ) -> (PartOfSpeech, Option<&'static str>) {
        if is_numeric(lower) || self.number_words.contains(lower) {
            return (PartOfSpeech::Num, None);
        }

        let closed_classes = [
            (&self.determiners, PartOfSpeech::Det),
            (&self.adpositions, PartOfSpeech::Adp),
            (&self.coordinating, PartOfSpeech::Cconj),
            (&self.subordinating, PartOfSpeech::Sconj),
            (&self.pronouns, PartOfSpeech::Pron),
        ];
        for (words, pos) in closed_classes {
            if words.contains(lower) {
                return (pos, None);
            }
        }
        if let Some(lemma) = self.auxiliaries.get(lower) {
            return (PartOfSpeech::Aux, Some(*lemma));
        }
        if self.adverbs.contains(lower) {
            return (PartOfSpeech::Adv, None);
        }

        if is_all_caps(word) || (starts_uppercase(word) && !context.sentence_start) {
            return (PartOfSpeech::Propn, None);
        }

        if let Some(lemma) = self.verb_forms.get(lower) {
            return (PartOfSpeech::Verb, Some(*lemma));
        }
        if let Some(lemma) = self.adjectives.get(lower) {
            return (PartOfSpeech::Adj, Some(*lemma));
        }
        if let Some(lemma) = self.noun_forms.get(lower) {
            return (PartOfSpeech::Noun, Some(*lemma));
        }
        if self.noun_exceptions.contains(lower) || self.invariant_plurals.contains(lower) {
            return (PartOfSpeech::Noun, None);
        }
        if !lower.chars().any(char::is_alphabetic) {
            return (PartOfSpeech::X, None);
        }
        if let Some(pos) = tag_by_suffix(lower, context) {
            return (pos, None);
        }

        if context.sentence_start && starts_uppercase(word) && context.next_capitalized {
            return (PartOfSpeech::Propn, None);
        }

        (PartOfSpeech::Noun, None)
    }

    fn lemma_for(&self, word: &str, lower: &str, pos: PartOfSpeech) -> String {
        match pos {
            PartOfSpeech::Propn => word.to_string(),
            PartOfSpeech::Noun => self.noun_lemma(lower),
            PartOfSpeech::Adj => self.adjective_lemma(lower),
            PartOfSpeech::Verb => verb_lemma(lower),
            _ => lower.to_string(),
        }
    }

    fn noun_lemma(&self, lower: &str) -> String {
        if let Some(lemma) = self.noun_forms.get(lower) {
            return lemma.to_string();
        }
        if self.invariant_plurals.contains(lower) {
            return lower.to_string();
        }
        singular(lower)
    }

    fn adjective_lemma(&self, lower: &str) -> String {
        let base_form = match lower.strip_suffix("ces") {
            Some(base) if char_len(base) >= 2 => format!("{}z", base),
            _ => singular(lower),
        };

        let masculine = FEMININE_ENDINGS.iter().find_map(|(feminine, masculine)| {
            base_form
                .strip_suffix(feminine)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{}{}", stem, masculine))
        });
        masculine.unwrap_or(base_form)
    }
}

impl LinguisticBackend for SpanishAnalyzer {
    fn name(&self) -> &str {
        "lexical-es"
    }

    fn parse(&self, text: &str) -> ParsedDoc {
        let tokens = self.tokenize(text);
        let entities = self.recognizer.recognize(text, &tokens);
        let noun_chunks = noun_chunks(&tokens);

        ParsedDoc {
            text: text.to_string(),
            tokens,
            entities,
            noun_chunks,
        }
    }

    fn has_vectors(&self) -> bool {
        false
    }

    fn similarity(&self, _a: &ParsedDoc, _b: &ParsedDoc) -> Option<f32> {
        None
    }
}

/// Split text on Unicode word boundaries. Single spaces are dropped.
fn segment(text: &str) -> Vec<Segment<'_>> {
    text.split_word_bound_indices()
        .filter(|(_, piece)| *piece != " ")
        .map(|(offset, piece)| {
            let kind = if piece.chars().all(char::is_whitespace) {
                SegmentKind::Space
            } else if piece.chars().next().is_some_and(|c| c.is_alphanumeric() || c == '_') {
                SegmentKind::Word
            } else if piece.chars().all(|c| SYMBOLS.contains(c)) {
                SegmentKind::Symbol
            } else {
                SegmentKind::Punct
            };
            Segment {
                text: piece,
                offset,
                kind,
            }
        })
        .collect()
}

/// Open-class tagging from word endings
fn tag_by_suffix(lower: &str, context: &TagContext<'_>) -> Option<PartOfSpeech> {
    let len = char_len(lower);
    let previous_pos = context.previous.map(|t| t.pos);
    let after_determiner = previous_pos == Some(PartOfSpeech::Det);
    let ends_with_any = |endings: &[&str]| endings.iter().any(|e| lower.ends_with(e));

    if len > 6 && lower.ends_with("mente") {
        return Some(PartOfSpeech::Adv);
    }
    if len > 5 && ends_with_any(&["ando", "iendo", "yendo", "amos", "emos", "imos"]) {
        return Some(PartOfSpeech::Verb);
    }
    if len >= 4 && ends_with_any(&["ar", "er", "ir"]) {
        return Some(PartOfSpeech::Verb);
    }
    if len >= 5 && ends_with_any(PARTICIPLE_ENDINGS) {
        let after_haber = context.previous.is_some_and(|t| t.lemma == "haber");
        return Some(if after_haber {
            PartOfSpeech::Verb
        } else if after_determiner {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Adj
        });
    }
    if len >= 5 && ends_with_any(STRONG_ADJECTIVE_ENDINGS) {
        return Some(if after_determiner {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Adj
        });
    }
    if len >= 5 && ends_with_any(WEAK_ADJECTIVE_ENDINGS) {
        let after_noun = matches!(previous_pos, Some(PartOfSpeech::Noun | PartOfSpeech::Adj));
        return Some(if after_noun {
            PartOfSpeech::Adj
        } else {
            PartOfSpeech::Noun
        });
    }
    if len >= 5 && (lower.ends_with('ó') || lower.ends_with('é')) {
        return Some(PartOfSpeech::Verb);
    }

    None
}

fn verb_lemma(lower: &str) -> String {
    if ["ar", "er", "ir"].iter().any(|e| lower.ends_with(e)) {
        return lower.to_string();
    }

    VERB_SUFFIXES
        .iter()
        .find_map(|(ending, infinitive)| {
            lower
                .strip_suffix(ending)
                .filter(|stem| char_len(stem) >= 2)
                .map(|stem| format!("{}{}", stem, infinitive))
        })
        .unwrap_or_else(|| lower.to_string())
}

/// Singular form of a regular Spanish (or English) plural
fn singular(lower: &str) -> String {
    if char_len(lower) <= 3 || !lower.ends_with('s') || lower.ends_with("ss") {
        return lower.to_string();
    }

    let stem = &lower[..lower.len() - 1];

    // An accented vowel before the final s marks a singular: inglés, país
    if stem.ends_with(&['á', 'é', 'í', 'ó', 'ú'][..]) {
        return lower.to_string();
    }

    if let Some(base) = lower.strip_suffix("iones") {
        return format!("{}ión", base);
    }

    if let Some(base) = lower.strip_suffix("es") {
        if char_len(base) >= 2 && base.ends_with(&['l', 'r', 'n', 'd', 'y', 'z'][..]) {
            return base.to_string();
        }
    }

    stem.to_string()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Two or more letters, all upper-case: SQL, AWS, S.A
fn is_all_caps(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn is_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SpanishAnalyzer {
        SpanishAnalyzer::new().unwrap()
    }

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        analyzer()
            .tokenize(text)
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    fn lemma_of(text: &str, word: &str) -> String {
        analyzer()
            .tokenize(text)
            .into_iter()
            .find(|t| t.text == word)
            .map(|t| t.lemma)
            .unwrap()
    }

    #[test]
    fn test_tokenize_keeps_offsets() {
        let text = "Hola, mundo";
        let tokens = analyzer().tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hola", ",", "mundo"]);
        for token in &tokens {
            assert_eq!(&text[token.offset..token.offset + token.text.len()], token.text);
        }
    }

    #[test]
    fn test_compound_words_stay_whole() {
        let texts: Vec<String> = tags("Uso Node.js y 1.500 registros")
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert!(texts.contains(&"Node.js".to_string()));
        assert!(texts.contains(&"1.500".to_string()));
    }

    #[test]
    fn test_newlines_are_space_tokens() {
        let tokens = analyzer().tokenize("uno\ndos");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_space);
        assert_eq!(tokens[1].pos, PartOfSpeech::Space);
    }

    #[test]
    fn test_closed_classes() {
        let tagged = tags("el desarrollo de software y la gestión que");
        assert_eq!(tagged[0].1, PartOfSpeech::Det);
        assert_eq!(tagged[2].1, PartOfSpeech::Adp);
        assert_eq!(tagged[4].1, PartOfSpeech::Cconj);
        assert_eq!(tagged[7].1, PartOfSpeech::Sconj);
    }

    #[test]
    fn test_open_classes() {
        let tagged: HashMap<String, PartOfSpeech> = tags(
            "He trabajado desarrollando aplicaciones web rápidamente para gestionar equipos con conocimiento técnico",
        )
        .into_iter()
        .collect();

        assert_eq!(tagged["He"], PartOfSpeech::Aux);
        assert_eq!(tagged["trabajado"], PartOfSpeech::Verb);
        assert_eq!(tagged["desarrollando"], PartOfSpeech::Verb);
        assert_eq!(tagged["aplicaciones"], PartOfSpeech::Noun);
        assert_eq!(tagged["rápidamente"], PartOfSpeech::Adv);
        assert_eq!(tagged["gestionar"], PartOfSpeech::Verb);
        assert_eq!(tagged["equipos"], PartOfSpeech::Noun);
        assert_eq!(tagged["técnico"], PartOfSpeech::Adj);
    }

    #[test]
    fn test_proper_nouns() {
        let tagged: HashMap<String, PartOfSpeech> =
            tags("Experiencia con Python y AWS en Quito").into_iter().collect();
        assert_eq!(tagged["Experiencia"], PartOfSpeech::Noun);
        assert_eq!(tagged["Python"], PartOfSpeech::Propn);
        assert_eq!(tagged["AWS"], PartOfSpeech::Propn);
        assert_eq!(tagged["Quito"], PartOfSpeech::Propn);
    }

    #[test]
    fn test_numbers_and_symbols() {
        let tagged = tags("5 años, 10%");
        assert_eq!(tagged[0].1, PartOfSpeech::Num);
        assert_eq!(tagged[2].1, PartOfSpeech::Punct);
        assert_eq!(tagged[3].1, PartOfSpeech::Num);
        assert_eq!(tagged[4].1, PartOfSpeech::Sym);
    }

    #[test]
    fn test_noun_lemmas() {
        assert_eq!(lemma_of("las habilidades", "habilidades"), "habilidad");
        assert_eq!(lemma_of("los proyectos", "proyectos"), "proyecto");
        assert_eq!(lemma_of("varias aplicaciones", "aplicaciones"), "aplicación");
        assert_eq!(lemma_of("los desarrolladores", "desarrolladores"), "desarrollador");
        assert_eq!(lemma_of("los lenguajes", "lenguajes"), "lenguaje");
        assert_eq!(lemma_of("el análisis", "análisis"), "análisis");
        assert_eq!(lemma_of("dos meses", "meses"), "mes");
        assert_eq!(lemma_of("nivel de inglés", "inglés"), "inglés");
    }

    #[test]
    fn test_verb_lemmas() {
        assert_eq!(lemma_of("estoy desarrollando", "desarrollando"), "desarrollar");
        assert_eq!(lemma_of("ha trabajado", "trabajado"), "trabajar");
        assert_eq!(lemma_of("la empresa tiene", "tiene"), "tener");
        assert_eq!(lemma_of("ella es", "es"), "ser");
    }

    #[test]
    fn test_adjective_lemmas() {
        assert_eq!(lemma_of("habilidades técnicas", "técnicas"), "técnico");
        assert_eq!(lemma_of("actitud proactiva", "proactiva"), "proactivo");
        assert_eq!(lemma_of("beneficios laborales", "laborales"), "laboral");
    }

    #[test]
    fn test_proper_noun_lemma_keeps_case() {
        assert_eq!(lemma_of("usamos PostgreSQL", "PostgreSQL"), "PostgreSQL");
    }

    #[test]
    fn test_stopword_flags() {
        let tokens = analyzer().tokenize("el equipo de datos");
        assert!(tokens[0].is_stop);
        assert!(!tokens[1].is_stop);
        assert!(tokens[2].is_stop);
    }

    #[test]
    fn test_noun_chunks() {
        let analyzer = analyzer();
        let doc = analyzer.parse("Buscamos un desarrollador senior para el equipo de datos");
        let chunks: Vec<String> = doc
            .noun_chunks
            .iter()
            .map(|c| {
                doc.chunk_tokens(c)
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        assert!(chunks.contains(&"un desarrollador senior".to_string()));
        assert!(chunks.contains(&"el equipo".to_string()));
        assert!(chunks.contains(&"datos".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let doc = analyzer().parse("");
        assert!(doc.tokens.is_empty());
        assert!(doc.entities.is_empty());
        assert!(doc.noun_chunks.is_empty());
    }

    #[test]
    fn test_no_vectors() {
        let analyzer = analyzer();
        let doc = analyzer.parse("texto");
        assert!(!analyzer.has_vectors());
        assert_eq!(analyzer.similarity(&doc, &doc), None);
    }
}
