//! Rule-based named entity recognition over tagged tokens

use crate::catalogs::entities::{
    CURRENCY_SYMBOLS, CURRENCY_WORDS, FIRST_NAMES, LOCATIONS, LOC_CUES, ORGANIZATIONS, ORG_CUES,
    ORG_SUFFIXES,
};
use crate::catalogs::lexicon::MONTHS;
use crate::error::{EtlError, Result};
use crate::nlp::backend::{EntitySpan, PartOfSpeech, Token};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;
use std::ops::Range;

/// Lower-case particles allowed inside a multi-word proper name
const NAME_CONNECTORS: &[&str] = &["de", "del", "la", "las", "los"];

/// Words after which a bare year reads as a date
const YEAR_CUES: &[&str] = &["en", "desde", "hasta", "año"];

pub struct EntityRecognizer {
    gazetteer: AhoCorasick,
    gazetteer_labels: Vec<&'static str>,
    org_cues: HashSet<&'static str>,
    org_suffixes: HashSet<&'static str>,
    loc_cues: HashSet<&'static str>,
    first_names: HashSet<&'static str>,
    currency_words: HashSet<&'static str>,
    months: HashSet<&'static str>,
}

impl EntityRecognizer {
    pub fn new() -> Result<Self> {
        let mut patterns: Vec<&'static str> = Vec::new();
        let mut gazetteer_labels = Vec::new();

        for (entries, label) in [(LOCATIONS, "LOC"), (ORGANIZATIONS, "ORG")] {
            patterns.extend(entries.iter().copied());
            gazetteer_labels.extend(std::iter::repeat(label).take(entries.len()));
        }

        let gazetteer = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| EtlError::Processing(format!("Failed to build entity gazetteer: {}", e)))?;

        Ok(Self {
            gazetteer,
            gazetteer_labels,
            org_cues: ORG_CUES.iter().copied().collect(),
            org_suffixes: ORG_SUFFIXES.iter().copied().collect(),
            loc_cues: LOC_CUES.iter().copied().collect(),
            first_names: FIRST_NAMES.iter().copied().collect(),
            currency_words: CURRENCY_WORDS.iter().copied().collect(),
            months: MONTHS.iter().copied().collect(),
        })
    }

    /// Find entity spans in `text`, whose tagged tokens are `tokens`.
    ///
    /// Spans never overlap. Repeated (text, label) pairs are reported once,
    /// in order of first appearance.
    pub fn recognize(&self, text: &str, tokens: &[Token]) -> Vec<EntitySpan> {
        let mut covered = vec![false; tokens.len()];
        let mut found: Vec<(Range<usize>, &'static str)> = Vec::new();

        self.gazetteer_spans(text, tokens, &mut covered, &mut found);
        self.pattern_spans(tokens, &mut covered, &mut found);
        self.proper_name_spans(tokens, &mut covered, &mut found);

        found.sort_by_key(|(range, _)| range.start);

        let mut seen = HashSet::new();
        found
            .into_iter()
            .map(|(range, label)| EntitySpan {
                text: span_text(text, tokens, &range).to_string(),
                label: label.to_string(),
                tokens: range,
            })
            .filter(|span| seen.insert((span.text.clone(), span.label.clone())))
            .collect()
    }

    /// Known places and organizations, aligned to token boundaries
    fn gazetteer_spans(
        &self,
        text: &str,
        tokens: &[Token],
        covered: &mut [bool],
        found: &mut Vec<(Range<usize>, &'static str)>,
    ) {
        for mat in self.gazetteer.find_iter(text) {
            let capitalized = text[mat.start()..]
                .chars()
                .next()
                .is_some_and(char::is_uppercase);
            if !capitalized {
                continue;
            }

            let start = tokens.iter().position(|t| t.offset == mat.start());
            let end = tokens
                .iter()
                .position(|t| t.offset + t.text.len() == mat.end());

            if let (Some(start), Some(end)) = (start, end) {
                let range = start..end + 1;
                if claim(covered, &range) {
                    found.push((range, self.gazetteer_labels[mat.pattern().as_usize()]));
                }
            }
        }
    }

    /// Dates, money amounts and percentages
    fn pattern_spans(
        &self,
        tokens: &[Token],
        covered: &mut [bool],
        found: &mut Vec<(Range<usize>, &'static str)>,
    ) {
        let mut i = 0;
        while i < tokens.len() {
            if covered[i] {
                i += 1;
                continue;
            }

            match self.match_pattern(tokens, i) {
                Some((end, label)) => {
                    let range = i..end;
                    if claim(covered, &range) {
                        found.push((range, label));
                    }
                    i = end;
                }
                None => i += 1,
            }
        }
    }

    fn match_pattern(&self, tokens: &[Token], i: usize) -> Option<(usize, &'static str)> {
        let lower_at = |k: usize| tokens.get(k).map(|t| t.text.to_lowercase());
        let token = &tokens[i];
        let lower = token.text.to_lowercase();

        if token.pos == PartOfSpeech::Num {
            let next = lower_at(i + 1);
            let next_two = lower_at(i + 2);

            if next.as_deref() == Some("%") {
                return Some((i + 2, "PERCENT"));
            }
            if next.as_deref() == Some("por") && next_two.as_deref() == Some("ciento") {
                return Some((i + 3, "PERCENT"));
            }
            if next
                .as_deref()
                .is_some_and(|word| self.currency_words.contains(word))
            {
                return Some((i + 2, "MONEY"));
            }
            if next.as_deref() == Some("de")
                && next_two
                    .as_deref()
                    .is_some_and(|word| self.months.contains(word))
            {
                return Some((self.extend_with_year(tokens, i + 3), "DATE"));
            }
            if is_year(&token.text)
                && i > 0
                && YEAR_CUES.contains(&tokens[i - 1].text.to_lowercase().as_str())
            {
                return Some((i + 1, "DATE"));
            }
            return None;
        }

        let followed_by_number = tokens
            .get(i + 1)
            .is_some_and(|next| next.pos == PartOfSpeech::Num);

        if CURRENCY_SYMBOLS.contains(&token.text.as_str()) && followed_by_number {
            return Some((i + 2, "MONEY"));
        }
        if self.currency_words.contains(lower.as_str()) && followed_by_number {
            return Some((i + 2, "MONEY"));
        }
        if self.months.contains(lower.as_str()) {
            return Some((self.extend_with_year(tokens, i + 1), "DATE"));
        }

        None
    }

    /// Extend a date ending at `end` over a trailing "de 2020" or "2020"
    fn extend_with_year(&self, tokens: &[Token], end: usize) -> usize {
        match tokens.get(end) {
            Some(token) if is_year(&token.text) => end + 1,
            Some(token)
                if matches!(token.text.to_lowercase().as_str(), "de" | "del")
                    && tokens.get(end + 1).is_some_and(|t| is_year(&t.text)) =>
            {
                end + 2
            }
            _ => end,
        }
    }

    /// Runs of proper nouns, labelled by cue words
    fn proper_name_spans(
        &self,
        tokens: &[Token],
        covered: &mut [bool],
        found: &mut Vec<(Range<usize>, &'static str)>,
    ) {
        let mut i = 0;
        while i < tokens.len() {
            if !is_open_name(tokens, covered, i) {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            loop {
                if is_open_name(tokens, covered, end) {
                    end += 1;
                } else if is_open_connector(tokens, covered, end)
                    && is_open_name(tokens, covered, end + 1)
                {
                    end += 2;
                } else {
                    break;
                }
            }

            let range = start..end;
            let label = self.label_name(&tokens[range.clone()]);
            if claim(covered, &range) {
                found.push((range, label));
            }
            i = end;
        }
    }

    fn label_name(&self, name: &[Token]) -> &'static str {
        let first = name
            .first()
            .map(|t| t.text.to_lowercase())
            .unwrap_or_default();
        let last = name
            .last()
            .map(|t| t.text.to_lowercase())
            .unwrap_or_default();

        if self.org_cues.contains(first.as_str())
            || (name.len() > 1 && self.org_suffixes.contains(last.trim_end_matches('.')))
        {
            "ORG"
        } else if self.loc_cues.contains(first.as_str()) {
            "LOC"
        } else if self.first_names.contains(first.as_str()) {
            "PER"
        } else {
            "MISC"
        }
    }
}

fn is_open_name(tokens: &[Token], covered: &[bool], k: usize) -> bool {
    tokens.get(k).is_some_and(|t| t.pos == PartOfSpeech::Propn) && !covered[k]
}

fn is_open_connector(tokens: &[Token], covered: &[bool], k: usize) -> bool {
    tokens
        .get(k)
        .is_some_and(|t| NAME_CONNECTORS.contains(&t.text.to_lowercase().as_str()))
        && !covered[k]
}

/// Mark `range` as covered unless any token in it already is
fn claim(covered: &mut [bool], range: &Range<usize>) -> bool {
    if range.is_empty() || range.end > covered.len() || covered[range.clone()].iter().any(|c| *c) {
        return false;
    }
    covered[range.clone()].iter_mut().for_each(|c| *c = true);
    true
}

fn span_text<'a>(text: &'a str, tokens: &[Token], range: &Range<usize>) -> &'a str {
    let start = tokens[range.start].offset;
    let last = &tokens[range.end - 1];
    &text[start..last.offset + last.text.len()]
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && word
            .parse::<u32>()
            .is_ok_and(|year| (1900..=2100).contains(&year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::spanish::SpanishAnalyzer;
    use crate::nlp::LinguisticBackend;

    fn entities(text: &str) -> Vec<(String, String)> {
        let analyzer = SpanishAnalyzer::new().unwrap();
        analyzer
            .parse(text)
            .entities
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect()
    }

    fn has(found: &[(String, String)], text: &str, label: &str) -> bool {
        found.iter().any(|(t, l)| t == text && l == label)
    }

    #[test]
    fn test_gazetteer_places_and_organizations() {
        let found = entities("Trabajé en Google y en el Banco Pichincha en Quito.");
        assert!(has(&found, "Google", "ORG"));
        assert!(has(&found, "Banco Pichincha", "ORG"));
        assert!(has(&found, "Quito", "LOC"));
    }

    #[test]
    fn test_lowercase_gazetteer_words_are_ignored() {
        let found = entities("me gusta el mercado de lima");
        assert!(found.is_empty());
    }

    #[test]
    fn test_person_and_cue_labels() {
        let found = entities("Referencia: la ingeniera María Fernanda López de la Universidad Técnica de Ambato.");
        assert!(has(&found, "María Fernanda López", "PER"));
        assert!(found.iter().any(|(t, l)| l == "ORG" && t.starts_with("Universidad Técnica")));
    }

    #[test]
    fn test_pattern_entities() {
        let found = entities("Salario de $1500 mensuales, bono del 10% desde marzo de 2021 y 300 dólares extra.");
        assert!(has(&found, "$1500", "MONEY"));
        assert!(has(&found, "10%", "PERCENT"));
        assert!(has(&found, "marzo de 2021", "DATE"));
        assert!(has(&found, "300 dólares", "MONEY"));
    }

    #[test]
    fn test_year_after_cue() {
        let found = entities("Graduado en 2019 con honores");
        assert!(has(&found, "2019", "DATE"));
    }

    #[test]
    fn test_duplicates_reported_once() {
        let found = entities("Viví en Quito. Luego volví a Quito.");
        assert_eq!(found.iter().filter(|(t, _)| t == "Quito").count(), 1);
    }

    #[test]
    fn test_is_year() {
        assert!(is_year("2024"));
        assert!(!is_year("1500"));
        assert!(!is_year("20245"));
    }
}
