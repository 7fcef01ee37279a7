//! Spanish stopwords

use std::collections::HashSet;
use std::sync::LazyLock;

pub const STOPWORDS_ES: &[&str] = &[
    // Articles
    "el", "la", "los", "las", "un", "una", "unos", "unas",
    // Prepositions
    "a", "ante", "bajo", "con", "contra", "de", "desde", "en", "entre",
    "hacia", "hasta", "para", "por", "según", "sin", "sobre", "tras",
    // Conjunctions
    "y", "e", "ni", "o", "u", "pero", "sino", "aunque", "que", "si",
    "porque", "como", "cuando", "donde", "mientras",
    // Pronouns
    "yo", "tú", "él", "ella", "nosotros", "vosotros", "ellos", "ellas",
    "me", "te", "se", "nos", "os", "lo", "le", "les",
    "mi", "tu", "su", "mis", "tus", "sus", "nuestro", "nuestra",
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas",
    "aquel", "aquella", "aquellos", "aquellas",
    "esto", "eso", "aquello",
    "quien", "quienes", "cual", "cuales",
    // Auxiliary verbs
    "ser", "estar", "haber", "tener", "poder", "deber",
    "es", "son", "está", "están", "ha", "han", "he", "has",
    "fue", "fueron", "era", "eran", "será", "serán",
    "tiene", "tienen", "tenía", "tenían",
    "puede", "pueden", "podía", "podían",
    // Adverbs
    "no", "sí", "muy", "más", "menos", "ya", "aún", "también",
    "siempre", "nunca", "ahora", "antes", "después", "aquí", "allí",
    "bien", "mal", "así", "solo", "tanto", "tan",
    // Others
    "del", "al", "qué", "cómo", "cuándo", "dónde", "cuánto",
    "todo", "toda", "todos", "todas", "algo", "alguien", "alguno",
    "ninguno", "nada", "nadie", "cada", "otro", "otra", "otros", "otras",
    "mismo", "misma", "mismos", "mismas",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_ES.iter().copied().collect());

/// The Spanish stopword set, built once.
pub fn stopwords_es() -> &'static HashSet<&'static str> {
    &STOPWORD_SET
}

/// Check a lower-cased word against the Spanish stopword set
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords() {
        assert!(is_stopword("de"));
        assert!(is_stopword("según"));
        assert!(is_stopword("tiene"));
        assert!(!is_stopword("desarrollador"));
    }

    #[test]
    fn test_set_contains_every_entry() {
        for word in STOPWORDS_ES {
            assert!(stopwords_es().contains(word));
        }
    }
}
