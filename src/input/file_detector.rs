//! Record file format detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    /// A single JSON value: one record or an array of records
    Json,
    /// One JSON record per line
    JsonLines,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => FileType::Json,
            "jsonl" | "ndjson" => FileType::JsonLines,
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("json"), FileType::Json);
        assert_eq!(FileType::from_extension("JSON"), FileType::Json);
        assert_eq!(FileType::from_extension("ndjson"), FileType::JsonLines);
        assert_eq!(FileType::from_extension("jsonl"), FileType::JsonLines);
        assert_eq!(FileType::from_extension("pdf"), FileType::Unknown);
    }
}
