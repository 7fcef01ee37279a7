//! Candidate and offer preprocessing for vectorization

use crate::config::{Config, PipelineConfig};
use crate::error::Result;
use crate::nlp::{Entity, NlpProcessor};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::records::{
    CandidateInput, OfferInput, ProcessedCandidate, ProcessedOffer, SkillRecord,
};
use crate::processing::skill_mapper::SkillMapper;
use crate::processing::text_cleaner::{MarkupStrategy, TextCleaner};
use log::debug;
use std::collections::HashSet;

const SECTION_SEPARATOR: &str = ". ";
const CANDIDATE_FALLBACK: &str = "Professional seeking employment";
const OFFER_FALLBACK: &str = "Job offer";

/// Clean -> normalize -> linguistic analysis -> canonical text.
///
/// Calls share no mutable state apart from the analyzer's one-time load.
pub struct PreprocessingPipeline {
    cleaner: TextCleaner,
    normalizer: TextNormalizer,
    skill_mapper: SkillMapper,
    nlp: NlpProcessor,
    use_nlp: bool,
    expand_abbreviations: bool,
    settings: PipelineConfig,
}

impl PreprocessingPipeline {
    pub fn new(config: &Config) -> Self {
        Self::with_processor(config, NlpProcessor::from_config(config))
    }

    /// Build around an existing adapter, e.g. one with a custom loader
    pub fn with_processor(config: &Config, nlp: NlpProcessor) -> Self {
        Self {
            cleaner: TextCleaner::new(MarkupStrategy::resolve(config.cleaning.markup_parser)),
            normalizer: TextNormalizer::new(config.normalization.remove_accents),
            skill_mapper: SkillMapper::new(),
            nlp,
            use_nlp: config.nlp.enabled,
            expand_abbreviations: config.normalization.expand_abbreviations,
            settings: config.pipeline.clone(),
        }
    }

    pub fn nlp(&self) -> &NlpProcessor {
        &self.nlp
    }

    pub fn uses_nlp(&self) -> bool {
        self.use_nlp
    }

    pub fn process_candidate(&self, input: &CandidateInput) -> Result<ProcessedCandidate> {
        let skills = self.process_skills(&input.technical_skills);
        let soft_skills = self.process_list(&input.soft_skills);
        let competencies = self.process_list(&input.competencies);
        let summary = self.process_text(&input.professional_summary);

        let (entities, key_phrases) = if self.use_nlp && !input.professional_summary.is_empty() {
            self.analyze(&self.cleaner.strip_for_analysis(&input.professional_summary))?
        } else {
            (Vec::new(), Vec::new())
        };

        let mut sections = Vec::new();
        push_list(&mut sections, "Technical skills", &skills);
        push_list(&mut sections, "Soft skills", &soft_skills);
        push_list(&mut sections, "Competencies", &competencies);
        if !summary.is_empty() {
            sections.push(format!("Profile: {}", summary));
        }
        self.push_areas(&mut sections, &key_phrases);

        let processed_text = compose(sections, CANDIDATE_FALLBACK);
        debug!("Candidate text: {} chars", processed_text.chars().count());

        Ok(ProcessedCandidate {
            processed_length: processed_text.chars().count(),
            original_length: input.textual_len(),
            processed_text,
            skills_normalized: skills,
            soft_skills_normalized: soft_skills,
            competencies_normalized: competencies,
            entities,
            key_phrases,
        })
    }

    pub fn process_offer(&self, input: &OfferInput) -> Result<ProcessedOffer> {
        let title = self.process_text(&input.title);
        let description = self.process_text(&input.description);
        let mandatory = self.process_skill_records(&input.mandatory_skills);
        let desirable = self.process_skill_records(&input.desirable_skills);
        let competencies = self.process_list(&input.required_competencies);

        let has_text = !input.title.is_empty() || !input.description.is_empty();
        let (entities, key_phrases) = if self.use_nlp && has_text {
            let text = format!("{}. {}", input.title, input.description);
            self.analyze(&self.cleaner.strip_for_analysis(&text))?
        } else {
            (Vec::new(), Vec::new())
        };

        let mut sections = Vec::new();
        if !title.is_empty() {
            sections.push(format!("Position: {}", title));
        }
        if !description.is_empty() {
            let body = if self.use_nlp {
                self.nlp.lemmatize(&self.cleaner.strip_for_analysis(&input.description))?
            } else {
                description
            };
            let body = truncate_chars(&body, self.settings.description_max_chars);
            // a description made only of stopwords lemmatizes to nothing
            if !body.is_empty() {
                sections.push(format!("Description: {}", body));
            }
        }
        push_list(&mut sections, "Required skills", &merge_unique(&mandatory, &desirable));
        push_list(&mut sections, "Competencies", &competencies);
        self.push_areas(&mut sections, &key_phrases);

        let processed_text = compose(sections, OFFER_FALLBACK);
        debug!("Offer text: {} chars", processed_text.chars().count());

        Ok(ProcessedOffer {
            processed_length: processed_text.chars().count(),
            original_length: input.textual_len(),
            processed_text,
            skills_mandatory: mandatory,
            skills_desirable: desirable,
            competencies_normalized: competencies,
            entities,
            key_phrases,
        })
    }

    fn analyze(&self, text: &str) -> Result<(Vec<Entity>, Vec<String>)> {
        let analysis = self.nlp.process(text)?;
        Ok((analysis.entities, analysis.key_phrases))
    }

    /// Clean and normalize one text
    fn process_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let cleaned = self.cleaner.clean(text);
        let normalized = self.normalizer.normalize(cleaned.as_str());

        if self.expand_abbreviations {
            self.normalizer.expand_abbreviations(&normalized)
        } else {
            normalized
        }
    }

    /// Process each element, dropping the ones that end up empty
    fn process_list<S: AsRef<str>>(&self, items: &[S]) -> Vec<String> {
        items
            .iter()
            .map(|item| self.process_text(item.as_ref()))
            .filter(|processed| !processed.is_empty())
            .collect()
    }

    fn process_skills<S: AsRef<str>>(&self, skills: &[S]) -> Vec<String> {
        let processed = self.process_list(skills);

        if !self.settings.map_skill_aliases {
            return processed;
        }

        processed
            .iter()
            .filter_map(|skill| self.skill_mapper.map_skill(skill.as_str()))
            .collect()
    }

    fn process_skill_records(&self, records: &[SkillRecord]) -> Vec<String> {
        let names: Vec<&str> = records.iter().map(SkillRecord::display_name).collect();
        self.process_skills(&names)
    }

    fn push_areas(&self, sections: &mut Vec<String>, key_phrases: &[String]) {
        let shown: Vec<&str> = key_phrases
            .iter()
            .take(self.settings.max_key_phrases_in_text)
            .map(String::as_str)
            .collect();
        push_list(sections, "Areas", &shown);
    }
}

fn push_list<S: AsRef<str>>(sections: &mut Vec<String>, label: &str, items: &[S]) {
    if items.is_empty() {
        return;
    }

    let joined = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    sections.push(format!("{}: {}", label, joined));
}

fn compose(sections: Vec<String>, fallback: &str) -> String {
    if sections.is_empty() {
        fallback.to_string()
    } else {
        sections.join(SECTION_SEPARATOR)
    }
}

/// Union of two lists without duplicates, in first-seen order
fn merge_unique(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .iter()
        .chain(second)
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect()
}

/// At most `max_chars` characters of `text`
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline_without_nlp() -> PreprocessingPipeline {
        let mut config = Config::default();
        config.nlp.enabled = false;
        PreprocessingPipeline::new(&config)
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("diseño", 4), "dise");
        assert_eq!(truncate_chars("diseño", 5), "diseñ");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_merge_unique_keeps_first_seen_order() {
        let a = vec!["python".to_string(), "sql".to_string()];
        let b = vec!["sql".to_string(), "docker".to_string(), "python".to_string()];
        assert_eq!(merge_unique(&a, &b), vec!["python", "sql", "docker"]);
    }

    #[test]
    fn test_compose_fallback() {
        assert_eq!(compose(Vec::new(), OFFER_FALLBACK), "Job offer");
        assert_eq!(
            compose(vec!["A: x".to_string(), "B: y".to_string()], OFFER_FALLBACK),
            "A: x. B: y"
        );
    }

    #[test]
    fn test_candidate_sections_without_nlp() {
        let pipeline = pipeline_without_nlp();
        let input = CandidateInput {
            technical_skills: vec!["Python".to_string(), "  ".to_string(), "<b>SQL</b>".to_string()],
            soft_skills: vec!["Trabajo en Equipo".to_string()],
            competencies: Vec::new(),
            professional_summary: "Ingeniero   de Datos".to_string(),
        };

        let result = pipeline.process_candidate(&input).unwrap();
        assert_eq!(result.skills_normalized, vec!["python", "sql"]);
        assert_eq!(
            result.processed_text,
            "Technical skills: python, sql. Soft skills: trabajo en equipo. Profile: ingeniero de datos"
        );
        assert!(result.entities.is_empty());
        assert!(result.key_phrases.is_empty());
        assert!(!pipeline.nlp().is_loaded());
    }

    #[test]
    fn test_empty_candidate_uses_fallback() {
        let pipeline = pipeline_without_nlp();
        let result = pipeline.process_candidate(&CandidateInput::default()).unwrap();
        assert_eq!(result.processed_text, CANDIDATE_FALLBACK);
        assert_eq!(result.processed_length, CANDIDATE_FALLBACK.chars().count());
    }

    #[test]
    fn test_skill_alias_mapping_is_opt_in() {
        let input = CandidateInput {
            technical_skills: vec!["JS".to_string(), "Node.js".to_string()],
            ..Default::default()
        };

        let plain = pipeline_without_nlp().process_candidate(&input).unwrap();
        assert_eq!(plain.skills_normalized, vec!["js", "node.js"]);

        let mut config = Config::default();
        config.nlp.enabled = false;
        config.pipeline.map_skill_aliases = true;
        let mapped = PreprocessingPipeline::new(&config)
            .process_candidate(&input)
            .unwrap();
        assert_eq!(mapped.skills_normalized, vec!["javascript", "nodejs"]);
    }

    #[test]
    fn test_abbreviation_expansion_is_opt_in() {
        let mut config = Config::default();
        config.nlp.enabled = false;
        config.normalization.expand_abbreviations = true;
        let pipeline = PreprocessingPipeline::new(&config);

        let input = OfferInput {
            title: "Ing. de Sistemas".to_string(),
            ..Default::default()
        };
        let result = pipeline.process_offer(&input).unwrap();
        assert_eq!(result.processed_text, "Position: ingeniero de sistemas");
    }

    #[test]
    fn test_offer_description_truncated_without_nlp() {
        let pipeline = pipeline_without_nlp();
        let input = OfferInput {
            description: "ñ".repeat(600),
            ..Default::default()
        };

        let result = pipeline.process_offer(&input).unwrap();
        let expected = format!("Description: {}", "ñ".repeat(500));
        assert_eq!(result.processed_text, expected);
    }
}
