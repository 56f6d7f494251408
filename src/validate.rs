//! Checks that data files no longer contain `[PLACEHOLDER]` tokens.

use std::{fs, path::Path, sync::LazyLock};

use log::debug;
use regex::Regex;

use crate::error::Result;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Z_\s]+)\]").expect("valid placeholder regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    FileNotFound,
    Placeholders(Vec<String>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Every `[UPPER CASE]` token in `text`, in order of appearance.
pub fn find_placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn validate_text(text: &str) -> Validation {
    let placeholders = find_placeholders(text);
    if placeholders.is_empty() {
        Validation::Valid
    } else {
        Validation::Placeholders(placeholders)
    }
}

pub fn validate_file(path: &Path) -> Result<Validation> {
    debug!("Validating {}", path.display());
    if !path.exists() {
        return Ok(Validation::FileNotFound);
    }
    Ok(validate_text(&fs::read_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn finds_template_tokens() {
        let found = find_placeholders(r#"{"name": "[YOUR FULL NAME]", "title": "[YOUR_TITLE]"}"#);
        assert_eq!(found, vec!["[YOUR FULL NAME]", "[YOUR_TITLE]"]);
    }

    #[test]
    fn ignores_lowercase_and_markdown_links() {
        assert!(find_placeholders("[Connect on LinkedIn](https://x) [a] []").is_empty());
    }

    #[test]
    fn bundled_data_is_filled_in() {
        assert!(validate_text(include_str!("../data/portfolio.json")).is_valid());
        assert!(validate_text(include_str!("../data/qa.json")).is_valid());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = validate_file(&dir.path().join("portfolio.json")).expect("validation runs");
        assert_eq!(result, Validation::FileNotFound);
    }

    #[test]
    fn file_with_placeholders_fails() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"email": "[YOUR EMAIL]"}}"#).expect("write temp file");
        let result = validate_file(file.path()).expect("validation runs");
        assert_eq!(result, Validation::Placeholders(vec!["[YOUR EMAIL]".to_string()]));
    }
}
