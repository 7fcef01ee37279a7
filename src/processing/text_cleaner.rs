//! Text cleaning: markup, URLs, emails and special characters

use regex::Regex;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// How markup is removed, resolved once when the cleaner is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupStrategy {
    /// Parse the text as an HTML fragment and keep visible text nodes
    Parser,
    /// Replace anything shaped like a tag with a space
    TagPattern,
}

impl MarkupStrategy {
    /// Use the parser when it was compiled in and the caller asks for it
    pub fn resolve(prefer_parser: bool) -> Self {
        if prefer_parser && cfg!(feature = "html-parser") {
            MarkupStrategy::Parser
        } else {
            MarkupStrategy::TagPattern
        }
    }
}

pub struct TextCleaner {
    markup: MarkupStrategy,
    html_regex: Regex,
    url_regex: Regex,
    email_regex: Regex,
    special_chars_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(MarkupStrategy::resolve(true))
    }
}

impl TextCleaner {
    pub fn new(markup: MarkupStrategy) -> Self {
        let html_regex = Regex::new(r"<[^>]+>").expect("Invalid HTML tag regex");

        let url_regex = Regex::new(r"https?://\S+|www\.\S+").expect("Invalid URL regex");

        let email_regex = Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex");

        // Word chars, whitespace, hyphen, period, comma and Spanish letters survive
        let special_chars_regex =
            Regex::new(r"[^\w\s\-.,áéíóúñüÁÉÍÓÚÑÜ]").expect("Invalid special chars regex");

        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            markup,
            html_regex,
            url_regex,
            email_regex,
            special_chars_regex,
            whitespace_regex,
        }
    }

    pub fn markup_strategy(&self) -> MarkupStrategy {
        self.markup
    }

    /// Clean text of markup, URLs, emails and special characters.
    ///
    /// `None` and empty input yield an empty string.
    pub fn clean<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return String::new(),
        };

        let mut cleaned = self.strip_markup(text);

        // Remove URLs
        cleaned = self.url_regex.replace_all(&cleaned, "").to_string();

        // Remove emails
        cleaned = self.email_regex.replace_all(&cleaned, "").to_string();

        // Remove special characters, keeping Spanish accents
        cleaned = self.special_chars_regex.replace_all(&cleaned, " ").to_string();

        self.whitespace_regex
            .replace_all(&cleaned, " ")
            .trim()
            .to_string()
    }

    /// Remove markup, URLs and emails but keep case, symbols and punctuation.
    ///
    /// Used on text handed to the linguistic analyzer, which needs `%`, `$`
    /// and sentence punctuation intact.
    pub fn strip_for_analysis(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let stripped = self.strip_markup(text);
        let stripped = self.url_regex.replace_all(&stripped, " ");
        let stripped = self.email_regex.replace_all(&stripped, " ");

        self.whitespace_regex
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }

    /// Remove stopwords from whitespace-separated text
    pub fn remove_stopwords<S>(&self, text: &str, stopwords: &HashSet<S>) -> String
    where
        S: Hash + Eq + Borrow<str>,
    {
        text.split_whitespace()
            .filter(|word| !stopwords.contains(word.to_lowercase().as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn strip_markup(&self, text: &str) -> String {
        match self.markup {
            MarkupStrategy::Parser if text.contains('<') || text.contains('&') => {
                Self::visible_text(text)
            }
            MarkupStrategy::Parser => text.to_string(),
            MarkupStrategy::TagPattern => {
                let stripped = self.html_regex.replace_all(text, " ");
                Self::decode_entities(&stripped)
            }
        }
    }

    #[cfg(feature = "html-parser")]
    fn visible_text(text: &str) -> String {
        let fragment = scraper::Html::parse_fragment(text);
        fragment
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[cfg(not(feature = "html-parser"))]
    fn visible_text(text: &str) -> String {
        Self::decode_entities(text)
    }

    fn decode_entities(text: &str) -> String {
        text.replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }
}
