//! Candidate and offer records, resolved once at the pipeline boundary

use crate::error::{EtlError, Result};
use crate::nlp::Entity;
use serde::Serialize;
use serde_json::{Map, Value};

/// Accepted keys per field, canonical name first then its Spanish alias
const TECHNICAL_SKILLS_KEYS: &[&str] = &["technicalSkills", "habilidadesTecnicas"];
const SOFT_SKILLS_KEYS: &[&str] = &["softSkills"];
const COMPETENCIES_KEYS: &[&str] = &["competencies", "competencias"];
const SUMMARY_KEYS: &[&str] = &["professionalSummary", "resumenProfesional"];

const TITLE_KEYS: &[&str] = &["title", "titulo"];
const DESCRIPTION_KEYS: &[&str] = &["description", "descripcion"];
const MANDATORY_SKILLS_KEYS: &[&str] = &["mandatorySkills", "habilidades_obligatorias"];
const DESIRABLE_SKILLS_KEYS: &[&str] = &["desirableSkills", "habilidades_deseables"];
const REQUIRED_COMPETENCIES_KEYS: &[&str] = &["requiredCompetencies", "competencias_requeridas"];

/// Candidate profile fields used for vectorization
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub competencies: Vec<String>,
    pub professional_summary: String,
}

/// Job offer fields used for vectorization
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferInput {
    pub title: String,
    pub description: String,
    pub mandatory_skills: Vec<SkillRecord>,
    pub desirable_skills: Vec<SkillRecord>,
    pub required_competencies: Vec<String>,
}

/// A skill given either as a bare name or as a record carrying a name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SkillRecord {
    PlainName(String),
    NamedRecord { name: String },
}

/// Keys under which a structured skill record exposes its display name
const SKILL_NAME_KEYS: &[&str] = &["nombre", "name"];

impl SkillRecord {
    /// Resolve a JSON element; shapes other than strings and objects are skipped
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(SkillRecord::PlainName(name.clone())),
            Value::Object(map) => {
                let name = SKILL_NAME_KEYS
                    .iter()
                    .filter_map(|key| map.get(*key).and_then(lenient::scalar_text))
                    .find(|name| !name.is_empty())
                    .unwrap_or_default();
                Some(SkillRecord::NamedRecord { name })
            }
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SkillRecord::PlainName(name) => name,
            SkillRecord::NamedRecord { name } => name,
        }
    }
}

impl From<&str> for SkillRecord {
    fn from(name: &str) -> Self {
        SkillRecord::PlainName(name.to_string())
    }
}

impl CandidateInput {
    pub fn from_value(value: Value) -> Result<Self> {
        let fields = Fields(as_object(&value)?);
        Ok(Self {
            technical_skills: fields.string_list(TECHNICAL_SKILLS_KEYS),
            soft_skills: fields.string_list(SOFT_SKILLS_KEYS),
            competencies: fields.string_list(COMPETENCIES_KEYS),
            professional_summary: fields.text(SUMMARY_KEYS),
        })
    }

    /// Character length of the record's JSON representation
    pub fn textual_len(&self) -> usize {
        textual_len(self)
    }
}

impl OfferInput {
    pub fn from_value(value: Value) -> Result<Self> {
        let fields = Fields(as_object(&value)?);
        Ok(Self {
            title: fields.text(TITLE_KEYS),
            description: fields.text(DESCRIPTION_KEYS),
            mandatory_skills: fields.skill_list(MANDATORY_SKILLS_KEYS),
            desirable_skills: fields.skill_list(DESIRABLE_SKILLS_KEYS),
            required_competencies: fields.string_list(REQUIRED_COMPETENCIES_KEYS),
        })
    }

    /// Character length of the record's JSON representation
    pub fn textual_len(&self) -> usize {
        textual_len(self)
    }
}

/// Field lookup over a record object.
///
/// A field is read from the first of its keys holding a non-null value, so
/// a record may carry both a key and its alias.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn get(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    fn text(&self, keys: &[&str]) -> String {
        self.get(keys).and_then(lenient::scalar_text).unwrap_or_default()
    }

    fn string_list(&self, keys: &[&str]) -> Vec<String> {
        self.get(keys)
            .map(|value| lenient::elements(value).iter().filter_map(lenient::scalar_text).collect())
            .unwrap_or_default()
    }

    fn skill_list(&self, keys: &[&str]) -> Vec<SkillRecord> {
        self.get(keys)
            .map(|value| lenient::elements(value).iter().filter_map(SkillRecord::from_value).collect())
            .unwrap_or_default()
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(EtlError::InvalidInput(format!(
            "Expected a JSON object record, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn textual_len<T: Serialize>(record: &T) -> usize {
    serde_json::to_string(record)
        .map(|text| text.chars().count())
        .unwrap_or_default()
}

/// Processed candidate, ready for vectorization
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCandidate {
    pub processed_text: String,
    pub skills_normalized: Vec<String>,
    pub soft_skills_normalized: Vec<String>,
    pub competencies_normalized: Vec<String>,
    pub entities: Vec<Entity>,
    pub key_phrases: Vec<String>,
    pub original_length: usize,
    pub processed_length: usize,
}

/// Processed job offer, ready for vectorization
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedOffer {
    pub processed_text: String,
    pub skills_mandatory: Vec<String>,
    pub skills_desirable: Vec<String>,
    pub competencies_normalized: Vec<String>,
    pub entities: Vec<Entity>,
    pub key_phrases: Vec<String>,
    pub original_length: usize,
    pub processed_length: usize,
}

/// Value readers that turn wrong-typed values into defaults instead of errors
mod lenient {
    use serde_json::Value;
    use std::slice;

    /// Textual representation of a scalar; `None` for null, arrays and objects
    pub(super) fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Elements of a list field; a bare string counts as a one-element list
    pub(super) fn elements(value: &Value) -> &[Value] {
        match value {
            Value::Array(items) => items,
            Value::String(_) => slice::from_ref(value),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_english_keys() {
        let input = CandidateInput::from_value(json!({
            "technicalSkills": ["React", "Node.js"],
            "softSkills": ["Teamwork"],
            "professionalSummary": "Developer",
            "unknownField": 42
        }))
        .unwrap();

        assert_eq!(input.technical_skills, vec!["React", "Node.js"]);
        assert_eq!(input.soft_skills, vec!["Teamwork"]);
        assert!(input.competencies.is_empty());
        assert_eq!(input.professional_summary, "Developer");
    }

    #[test]
    fn test_candidate_spanish_aliases() {
        let input = CandidateInput::from_value(json!({
            "habilidadesTecnicas": ["Python"],
            "competencias": ["Liderazgo"],
            "resumenProfesional": "Ingeniera de datos"
        }))
        .unwrap();

        assert_eq!(input.technical_skills, vec!["Python"]);
        assert_eq!(input.competencies, vec!["Liderazgo"]);
        assert_eq!(input.professional_summary, "Ingeniera de datos");
    }

    #[test]
    fn test_canonical_key_wins_over_alias() {
        let input = CandidateInput::from_value(json!({
            "competencies": ["Leadership"],
            "competencias": ["Liderazgo"],
            "resumenProfesional": "Ingeniera de datos"
        }))
        .unwrap();
        assert_eq!(input.competencies, vec!["Leadership"]);
        assert_eq!(input.professional_summary, "Ingeniera de datos");

        let offer = OfferInput::from_value(json!({
            "title": "Dev",
            "titulo": "Desarrollador",
            "description": null,
            "descripcion": "Backend"
        }))
        .unwrap();
        assert_eq!(offer.title, "Dev");
        assert_eq!(offer.description, "Backend");
    }

    #[test]
    fn test_null_and_wrong_types_default() {
        let input = CandidateInput::from_value(json!({
            "technicalSkills": null,
            "softSkills": {"not": "a list"},
            "competencies": ["Scrum", 7, null, ["nested"], {"x": 1}],
            "professionalSummary": ["not", "a", "string"]
        }))
        .unwrap();

        assert!(input.technical_skills.is_empty());
        assert!(input.soft_skills.is_empty());
        assert_eq!(input.competencies, vec!["Scrum", "7"]);
        assert_eq!(input.professional_summary, "");
    }

    #[test]
    fn test_bare_string_is_single_element_list() {
        let input = CandidateInput::from_value(json!({ "softSkills": "Empatía" })).unwrap();
        assert_eq!(input.soft_skills, vec!["Empatía"]);
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        assert!(matches!(
            CandidateInput::from_value(json!(["a", "b"])),
            Err(EtlError::InvalidInput(_))
        ));
        assert!(OfferInput::from_value(Value::Null).is_err());
    }

    #[test]
    fn test_offer_skill_records() {
        let input = OfferInput::from_value(json!({
            "titulo": "Analista",
            "habilidades_obligatorias": [
                "SQL",
                {"nombre": "Excel", "nivel": "avanzado"},
                {"name": "Power BI"},
                {"nombre": "", "name": "Tableau"},
                {"nivel": "básico"},
                12,
                null
            ],
            "desirableSkills": [{"name": "Python"}]
        }))
        .unwrap();

        assert_eq!(input.title, "Analista");
        let names: Vec<&str> = input.mandatory_skills.iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["SQL", "Excel", "Power BI", "Tableau", ""]);
        assert_eq!(
            input.desirable_skills,
            vec![SkillRecord::NamedRecord { name: "Python".to_string() }]
        );
    }

    #[test]
    fn test_textual_len_counts_chars() {
        let input = CandidateInput {
            professional_summary: "añoñ".to_string(),
            ..Default::default()
        };
        let expected = serde_json::to_string(&input).unwrap().chars().count();
        assert_eq!(input.textual_len(), expected);
        assert!(expected < serde_json::to_string(&input).unwrap().len());
    }

    #[test]
    fn test_processed_candidate_field_names() {
        let processed = ProcessedCandidate {
            processed_text: "x".to_string(),
            skills_normalized: vec![],
            soft_skills_normalized: vec![],
            competencies_normalized: vec![],
            entities: vec![],
            key_phrases: vec![],
            original_length: 1,
            processed_length: 1,
        };
        let value = serde_json::to_value(&processed).unwrap();
        for key in [
            "processedText",
            "skillsNormalized",
            "softSkillsNormalized",
            "competenciesNormalized",
            "entities",
            "keyPhrases",
            "originalLength",
            "processedLength",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
