//! Q&A table loading and load-time validation.

use std::{fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

pub const BUNDLED_QA: &str = include_str!("../../data/qa.json");

/// One question/answer pair and the keywords that point to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The authored Q&A table. Record order decides ties, so it is kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaTable {
    #[serde(rename = "defaultQA", default)]
    pub records: Vec<QaRecord>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

impl QaTable {
    /// Parse and validate a table from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(raw)?;
        table.validate()?;
        Ok(table)
    }

    /// The table compiled into the binary.
    pub fn bundled() -> Result<Self> {
        debug!("Loading bundled Q&A table");
        Self::from_json(BUNDLED_QA)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading Q&A table from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Load from `path` when given, otherwise the bundled table.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let table = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::bundled()?,
        };
        info!(
            "Loaded {} Q&A records and {} suggested questions",
            table.records.len(),
            table.suggested_questions.len()
        );
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            let invalid = |reason: &str| PortfolioError::InvalidQa {
                index,
                reason: reason.to_string(),
            };

            if record.question.trim().is_empty() {
                return Err(invalid("question is empty"));
            }
            if record.answer.trim().is_empty() {
                return Err(invalid("answer is empty"));
            }
            // An empty keyword is contained in every input.
            if record.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(invalid("keyword is empty"));
            }
        }
        Ok(())
    }
}
