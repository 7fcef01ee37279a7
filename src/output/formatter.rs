//! Output formatters for processed records and linguistic analyses

use crate::error::Result;
use crate::nlp::{Entity, LinguisticAnalysis, PartOfSpeech};
use crate::processing::{ProcessedCandidate, ProcessedOffer};
use colored::{Color, Colorize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact JSON, one document
    Json,
    /// Indented JSON
    Pretty,
    /// Human-readable console view
    Console,
}

/// Trait for rendering pipeline results
pub trait OutputFormatter {
    fn format_candidates(&self, results: &[ProcessedCandidate]) -> Result<String>;
    fn format_offers(&self, results: &[ProcessedOffer]) -> Result<String>;
    fn format_analysis(
        &self,
        analysis: &LinguisticAnalysis,
        pos_tags: Option<&[(String, PartOfSpeech)]>,
    ) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// JSON formatter; a single result is written as an object, a batch as an array
pub struct JsonFormatter {
    pretty: bool,
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }

    fn render_batch<T: Serialize>(&self, results: &[T]) -> Result<String> {
        match results {
            [single] => self.render(single),
            batch => self.render(batch),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisView<'a> {
    #[serde(flatten)]
    analysis: &'a LinguisticAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos_tags: Option<Vec<PosTagView<'a>>>,
}

#[derive(Serialize)]
struct PosTagView<'a> {
    text: &'a str,
    pos: PartOfSpeech,
}

impl OutputFormatter for JsonFormatter {
    fn format_candidates(&self, results: &[ProcessedCandidate]) -> Result<String> {
        self.render_batch(results)
    }

    fn format_offers(&self, results: &[ProcessedOffer]) -> Result<String> {
        self.render_batch(results)
    }

    fn format_analysis(
        &self,
        analysis: &LinguisticAnalysis,
        pos_tags: Option<&[(String, PartOfSpeech)]>,
    ) -> Result<String> {
        let view = AnalysisView {
            analysis,
            pos_tags: pos_tags.map(|tags| {
                tags.iter()
                    .map(|(text, pos)| PosTagView { text, pos: *pos })
                    .collect()
            }),
        };
        self.render(&view)
    }

    fn supports_format(&self) -> OutputFormat {
        if self.pretty {
            OutputFormat::Pretty
        } else {
            OutputFormat::Json
        }
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_list(&self, label: &str, items: &[String], color: Color) -> String {
        if items.is_empty() {
            return format!("{}: {}\n", label, self.colorize("(none)", Color::BrightBlack));
        }
        let joined = items
            .iter()
            .map(|item| self.colorize(item, color))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}\n", label, joined)
    }

    fn format_entities(&self, entities: &[Entity]) -> String {
        if entities.is_empty() {
            return String::new();
        }

        let mut output = String::from("Entities:\n");
        for entity in entities {
            output.push_str(&format!(
                "  • {} [{}] {}\n",
                self.colorize(&entity.text, Color::Cyan),
                entity.label,
                entity.description
            ));
        }
        output
    }

    fn format_text(&self, text: &str) -> String {
        format!("{}\n{}\n", self.colorize("Processed text:", Color::Cyan), text)
    }

    fn format_lengths(&self, original: usize, processed: usize) -> String {
        format!("Length: {} → {} characters\n", original, processed)
    }

    fn numbered_title(base: &str, index: usize, total: usize) -> String {
        if total > 1 {
            format!("{} {}/{}", base, index + 1, total)
        } else {
            base.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_candidates(&self, results: &[ProcessedCandidate]) -> Result<String> {
        let mut output = String::new();

        for (index, result) in results.iter().enumerate() {
            output.push_str(&self.format_header(
                &Self::numbered_title("👤 CANDIDATE", index, results.len()),
                1,
            ));
            output.push_str(&self.format_text(&result.processed_text));
            output.push_str(&self.format_header("Normalized fields", 2));
            output.push_str(&self.format_list("Technical skills", &result.skills_normalized, Color::Green));
            output.push_str(&self.format_list("Soft skills", &result.soft_skills_normalized, Color::Green));
            output.push_str(&self.format_list("Competencies", &result.competencies_normalized, Color::Green));
            output.push_str(&self.format_list("Key phrases", &result.key_phrases, Color::Yellow));
            output.push_str(&self.format_entities(&result.entities));
            output.push_str(&self.format_lengths(result.original_length, result.processed_length));
        }

        Ok(output)
    }

    fn format_offers(&self, results: &[ProcessedOffer]) -> Result<String> {
        let mut output = String::new();

        for (index, result) in results.iter().enumerate() {
            output.push_str(&self.format_header(
                &Self::numbered_title("💼 JOB OFFER", index, results.len()),
                1,
            ));
            output.push_str(&self.format_text(&result.processed_text));
            output.push_str(&self.format_header("Normalized fields", 2));
            output.push_str(&self.format_list("Mandatory skills", &result.skills_mandatory, Color::Green));
            output.push_str(&self.format_list("Desirable skills", &result.skills_desirable, Color::Green));
            output.push_str(&self.format_list("Competencies", &result.competencies_normalized, Color::Green));
            output.push_str(&self.format_list("Key phrases", &result.key_phrases, Color::Yellow));
            output.push_str(&self.format_entities(&result.entities));
            output.push_str(&self.format_lengths(result.original_length, result.processed_length));
        }

        Ok(output)
    }

    fn format_analysis(
        &self,
        analysis: &LinguisticAnalysis,
        pos_tags: Option<&[(String, PartOfSpeech)]>,
    ) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🔍 LINGUISTIC ANALYSIS", 1));
        output.push_str(&format!("Original: {}\n", analysis.original));
        output.push_str(&format!(
            "Lemmatized: {}\n",
            self.colorize(&analysis.lemmatized, Color::Cyan)
        ));
        output.push_str(&self.format_list("Nouns", &analysis.nouns, Color::Green));
        output.push_str(&self.format_list("Verbs", &analysis.verbs, Color::Green));
        output.push_str(&self.format_list("Key phrases", &analysis.key_phrases, Color::Yellow));
        output.push_str(&self.format_entities(&analysis.entities));

        if let Some(tags) = pos_tags {
            output.push_str(&self.format_header("Part-of-speech tags", 2));
            for (text, pos) in tags.iter().filter(|(text, _)| !text.trim().is_empty()) {
                output.push_str(&format!("  {:<20} {}\n", text, self.colorize(pos.as_str(), Color::Magenta)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// Formatter for a format
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(false)),
        OutputFormat::Pretty => Box::new(JsonFormatter::new(true)),
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
    }
}
