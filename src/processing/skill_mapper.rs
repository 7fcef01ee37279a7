//! Skill alias mapping and semantic context

use crate::catalogs::{SKILL_ALIASES, SKILL_CONTEXT};
use std::collections::HashMap;

/// Maps skills to canonical names and appends semantic context
pub struct SkillMapper {
    alias_map: HashMap<String, String>,
    context_map: HashMap<String, String>,
}

impl Default for SkillMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillMapper {
    pub fn new() -> Self {
        let alias_map = SKILL_ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_lowercase(), canonical.to_lowercase()))
            .collect();

        let context_map = SKILL_CONTEXT
            .iter()
            .map(|(skill, context)| (skill.to_lowercase(), context.to_string()))
            .collect();

        Self {
            alias_map,
            context_map,
        }
    }

    /// Canonical name for a skill, or the lower-cased input when no alias exists.
    ///
    /// Returns `None` for missing or blank input.
    pub fn map_skill<'a>(&self, skill: impl Into<Option<&'a str>>) -> Option<String> {
        let skill_lower = skill.into()?.trim().to_lowercase();

        if skill_lower.is_empty() {
            return None;
        }

        match self.alias_map.get(&skill_lower) {
            Some(canonical) => Some(canonical.clone()),
            None => Some(skill_lower),
        }
    }

    /// Append the context phrase to each known skill
    pub fn add_context<S: AsRef<str>>(&self, skills: &[S]) -> Vec<String> {
        skills
            .iter()
            .map(|skill| {
                let skill_lower = skill.as_ref().to_lowercase();
                match self.context_map.get(&skill_lower) {
                    Some(context) => format!("{} {}", skill_lower, context),
                    None => skill_lower,
                }
            })
            .collect()
    }

    /// Related skills for a skill. No relation graph is loaded, so this is always empty.
    pub fn get_related_skills(&self, _skill: &str) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_alias() {
        let mapper = SkillMapper::new();
        assert_eq!(mapper.map_skill("JS"), Some("javascript".to_string()));
        assert_eq!(mapper.map_skill("  Node.js "), Some("nodejs".to_string()));
        assert_eq!(mapper.map_skill("React.js"), Some("react".to_string()));
    }

    #[test]
    fn test_unmapped_skill_is_lowercased() {
        let mapper = SkillMapper::new();
        assert_eq!(mapper.map_skill(" Terraform "), Some("terraform".to_string()));
    }

    #[test]
    fn test_empty_skill() {
        let mapper = SkillMapper::new();
        assert_eq!(mapper.map_skill(None), None);
        assert_eq!(mapper.map_skill(""), None);
        assert_eq!(mapper.map_skill("   "), None);
    }

    #[test]
    fn test_add_context() {
        let mapper = SkillMapper::new();
        let result = mapper.add_context(&["javascript", "React", "cobol"]);
        assert_eq!(result.len(), 3);
        assert!(result[0].contains("programacion"));
        assert!(result[1].starts_with("react "));
        assert!(result[1].contains("frontend"));
        assert_eq!(result[2], "cobol");
    }

    #[test]
    fn test_add_context_keeps_duplicates_and_order() {
        let mapper = SkillMapper::new();
        let result = mapper.add_context(&["cobol".to_string(), "cobol".to_string()]);
        assert_eq!(result, vec!["cobol", "cobol"]);
    }

    #[test]
    fn test_related_skills_is_empty() {
        assert!(SkillMapper::new().get_related_skills("python").is_empty());
    }
}
