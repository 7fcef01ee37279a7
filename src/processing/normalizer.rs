//! Case, accent and whitespace normalization

use log::debug;
use regex::Regex;

/// Abbreviation -> expansion, applied in this order
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ing.", "ingeniero"),
    ("lic.", "licenciado"),
    ("dr.", "doctor"),
    ("sr.", "señor"),
    ("sra.", "señora"),
    ("exp.", "experiencia"),
    ("req.", "requerido"),
    ("min.", "mínimo"),
    ("max.", "máximo"),
    ("aprox.", "aproximadamente"),
];

pub struct TextNormalizer {
    remove_accents: bool,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TextNormalizer {
    /// `remove_accents` only takes effect when transliteration support is compiled in
    pub fn new(remove_accents: bool) -> Self {
        if remove_accents && !Self::can_transliterate() {
            debug!("Accent removal requested but transliteration is not available; ignoring");
        }

        Self {
            remove_accents: remove_accents && Self::can_transliterate(),
            whitespace_regex: Regex::new(r"\s+").expect("Invalid whitespace regex"),
        }
    }

    pub fn can_transliterate() -> bool {
        cfg!(feature = "transliteration")
    }

    pub fn removes_accents(&self) -> bool {
        self.remove_accents
    }

    /// Optionally strip accents, then lower-case, collapse whitespace and trim
    pub fn normalize<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return String::new(),
        };

        // compatibility decomposition can produce upper case ("㎒" -> "MHz")
        let normalized = if self.remove_accents {
            Self::strip_diacritics(text).to_lowercase()
        } else {
            text.to_lowercase()
        };

        self.whitespace_regex
            .replace_all(&normalized, " ")
            .trim()
            .to_string()
    }

    /// Expand common abbreviations by sequential literal replacement.
    ///
    /// Later entries see the output of earlier ones.
    pub fn expand_abbreviations(&self, text: &str) -> String {
        ABBREVIATIONS
            .iter()
            .fold(text.to_string(), |acc, (abbr, expanded)| acc.replace(abbr, expanded))
    }

    #[cfg(feature = "transliteration")]
    fn strip_diacritics(text: &str) -> String {
        use unicode_normalization::char::is_combining_mark;
        use unicode_normalization::UnicodeNormalization;

        text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
    }

    #[cfg(not(feature = "transliteration"))]
    fn strip_diacritics(text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("HELLO World"), "hello world");
    }

    #[test]
    fn test_trim_spaces() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("  hello   world  "), "hello world");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize(None), "");
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize(" \n\t "), "");
    }

    #[test]
    fn test_accents_kept_by_default() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("Gestión de Proyectos"), "gestión de proyectos");
    }

    #[cfg(feature = "transliteration")]
    #[test]
    fn test_accent_removal() {
        let normalizer = TextNormalizer::new(true);
        assert!(normalizer.removes_accents());
        assert_eq!(normalizer.normalize("Diseño  Gráfico Pingüino"), "diseno grafico pinguino");
        assert_eq!(normalizer.normalize("5㎒ ℌ"), "5mhz h");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new(true);
        for text in [
            "  Árbol  DE   Decisión ",
            "HELLO\nWorld",
            "",
            "ñandú\t\tÑANDÚ",
            "x",
            "Frecuencia 5㎒",
            "ℌilbert İstanbul",
        ] {
            let once = normalizer.normalize(text);
            assert_eq!(normalizer.normalize(once.as_str()), once);
        }
    }

    #[test]
    fn test_expand_abbreviations() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.expand_abbreviations("ing. en sistemas, exp. 3 años"),
            "ingeniero en sistemas, experiencia 3 años"
        );
    }

    #[test]
    fn test_expansion_is_sequential() {
        let normalizer = TextNormalizer::default();
        // "sr." is not a substring of "sra."
        assert_eq!(normalizer.expand_abbreviations("lic. y sra."), "licenciado y señora");
        assert_eq!(normalizer.expand_abbreviations("dr.min."), "doctormínimo");
    }
}
