//! Keyword scoring for Q&A records.

use log::debug;

use super::knowledge::QaRecord;

/// Added when the input contains a record's whole question.
pub const QUESTION_BONUS: u32 = 10;

/// A record with its match keys lower-cased ahead of time.
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    pub record: QaRecord,
    keywords: Vec<String>,
    question: String,
}

impl IndexedRecord {
    /// `question` is the templated question text, as a visitor would read it.
    pub fn new(record: QaRecord, question: &str) -> Self {
        let keywords = record.keywords.iter().map(|k| k.to_lowercase()).collect();
        Self {
            record,
            keywords,
            question: question.to_lowercase(),
        }
    }

    /// One point per contained keyword, plus the bonus when the input
    /// contains the full question. `input` must already be lower-cased.
    pub fn score(&self, input: &str) -> u32 {
        let keyword_hits = self
            .keywords
            .iter()
            .filter(|keyword| input.contains(keyword.as_str()))
            .count();
        let mut score = u32::try_from(keyword_hits).unwrap_or(u32::MAX);

        if input.contains(self.question.as_str()) {
            score = score.saturating_add(QUESTION_BONUS);
        }
        score
    }
}

/// The first record with the highest non-zero score. `input` must already
/// be lower-cased.
pub fn find_best_match<'a>(records: &'a [IndexedRecord], input: &str) -> Option<&'a IndexedRecord> {
    let mut best: Option<(&IndexedRecord, u32)> = None;

    for record in records {
        let score = record.score(input);
        if score == 0 {
            continue;
        }

        let is_better = best
            .as_ref()
            .is_none_or(|(_, best_score)| score > *best_score);

        if is_better {
            debug!("New best Q&A match: '{}' (score: {score})", record.record.question);
            best = Some((record, score));
        }
    }

    best.map(|(record, _)| record)
}
