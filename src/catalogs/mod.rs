//! Static catalog data: stopwords, skill aliases, lexicons and gazetteers.
//!
//! Tables are compiled into the binary and never mutated at runtime.

pub mod entities;
pub mod lexicon;
pub mod skills;
pub mod stopwords;

pub use skills::{SKILL_ALIASES, SKILL_CONTEXT};
pub use stopwords::{is_stopword, stopwords_es, STOPWORDS_ES};
