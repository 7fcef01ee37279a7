//! Loads raw JSON records from files or stdin

use crate::error::{EtlError, Result};
use crate::input::file_detector::FileType;
use log::{debug, info};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Source name that reads from standard input
pub const STDIN_SOURCE: &str = "-";

#[derive(Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read records from a path, or from stdin when `source` is `-`
    pub fn read_records(&self, source: &str) -> Result<Vec<Value>> {
        if source == STDIN_SOURCE {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            debug!("Read {} bytes from stdin", content.len());
            return parse_json_records(&content);
        }

        self.read_file(Path::new(source))
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<Value>> {
        if !path.exists() {
            return Err(EtlError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let content = std::fs::read_to_string(path)?;

        let records = match file_type {
            FileType::Json => {
                info!("Reading JSON records from: {}", path.display());
                parse_json_records(&content)?
            }
            FileType::JsonLines => {
                info!("Reading JSON lines from: {}", path.display());
                parse_json_lines(&content)?
            }
            FileType::Unknown => {
                return Err(EtlError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        debug!("Loaded {} records", records.len());
        Ok(records)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                EtlError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

/// A JSON document holding one record or an array of records
pub fn parse_json_records(content: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(records) => Ok(records),
        record => Ok(vec![record]),
    }
}

/// One record per non-blank line
pub fn parse_json_lines(content: &str) -> Result<Vec<Value>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                EtlError::InvalidInput(format!("Invalid JSON on line {}: {}", index + 1, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_single_record_and_array() {
        assert_eq!(parse_json_records(r#"{"a": 1}"#).unwrap(), vec![json!({"a": 1})]);
        assert_eq!(
            parse_json_records(r#"[{"a": 1}, {"b": 2}]"#).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_json_lines_skip_blank_lines() {
        let records = parse_json_lines("{\"a\": 1}\n\n  \n{\"b\": 2}\n").unwrap();
        assert_eq!(records, vec![json!({"a": 1}), json!({"b": 2})]);
    }

    #[test]
    fn test_json_lines_report_line_number() {
        let err = parse_json_lines("{\"a\": 1}\n{oops").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_read_file_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.ndjson");
        std::fs::write(&path, "{\"titulo\": \"Analista\"}\n{\"titulo\": \"QA\"}\n").unwrap();

        let records = InputManager::new().read_file(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_unsupported_and_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cv.pdf");
        std::fs::write(&path, "%PDF").unwrap();

        let manager = InputManager::new();
        assert!(matches!(
            manager.read_file(&path),
            Err(EtlError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            manager.read_records(temp_dir.path().join("absent.json").to_str().unwrap()),
            Err(EtlError::InvalidInput(_))
        ));
    }
}
