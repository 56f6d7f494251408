use log::debug;

use crate::{
    error::{PortfolioError, Result},
    types::PersonContext,
};

use super::{
    fallback::fallback_response,
    knowledge::{QaRecord, QaTable},
    matching::{IndexedRecord, find_best_match},
    templating::render_template,
};

/// Answers free text from a fixed Q&A table.
///
/// Built once at startup and read-only afterwards, so a shared reference
/// can serve any number of callers.
#[derive(Debug, Clone)]
pub struct StaticResponder {
    records: Vec<IndexedRecord>,
    suggestions: Vec<String>,
    person: PersonContext,
}

impl StaticResponder {
    /// Index `table` for matching. Questions are templated before they are
    /// lower-cased, so a visitor typing the displayed question hits the bonus.
    /// A question that renders to blank text would match every input and is
    /// rejected.
    pub fn new(table: QaTable, person: PersonContext) -> Result<Self> {
        let records = table
            .records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let question = render_template(&record.question, &person);
                if question.trim().is_empty() {
                    return Err(PortfolioError::InvalidQa {
                        index,
                        reason: format!("question '{}' renders empty", record.question),
                    });
                }
                Ok(IndexedRecord::new(record, &question))
            })
            .collect::<Result<Vec<_>>>()?;

        let suggestions = table
            .suggested_questions
            .iter()
            .map(|question| render_template(question, &person))
            .collect();

        Ok(Self {
            records,
            suggestions,
            person,
        })
    }

    /// Reply to `input`. Never empty, and the same input always gets the
    /// same reply.
    pub fn respond(&self, input: &str) -> String {
        let normalized = input.to_lowercase();

        if let Some(matched) = find_best_match(&self.records, &normalized) {
            return render_template(&matched.record.answer, &self.person);
        }

        debug!("No Q&A match, using fallback reply");
        fallback_response(&normalized, &self.person)
    }

    /// Suggested questions, templated, in display order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Identity used for templating and fallback replies.
    pub fn person(&self) -> &PersonContext {
        &self.person
    }

    /// Stored records in table order.
    pub fn records(&self) -> impl Iterator<Item = &QaRecord> {
        self.records.iter().map(|indexed| &indexed.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(question: &str, answer: &str, keywords: &[&str]) -> QaRecord {
        QaRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    fn person() -> PersonContext {
        PersonContext {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            email: Some("ada@example.com".to_string()),
            location: Some("London".to_string()),
        }
    }

    fn role_responder() -> StaticResponder {
        let table = QaTable {
            records: vec![record("What is your role?", "Engineer.", &["role", "job"])],
            suggested_questions: Vec::new(),
        };
        StaticResponder::new(table, person()).expect("valid table")
    }

    #[test]
    fn keyword_match_returns_answer() {
        assert_eq!(role_responder().respond("tell me your role"), "Engineer.");
    }

    #[test]
    fn verbatim_question_returns_answer() {
        assert_eq!(role_responder().respond("What is your role?"), "Engineer.");
    }

    #[test]
    fn unmatched_greeting_falls_back() {
        assert!(role_responder().respond("hello there").starts_with("Hello!"));
    }

    #[test]
    fn greeting_is_case_insensitive() {
        let responder = role_responder();
        for input in ["HELLO", "hello", "HeLLo"] {
            assert!(responder.respond(input).starts_with("Hello!"), "input: {input}");
        }
    }

    #[test]
    fn generic_fallback_names_person() {
        let reply = role_responder().respond("favourite colour?");
        assert!(reply.contains("Ada Lovelace"));
        assert!(reply.starts_with("I'd be happy to help"));
    }

    #[test]
    fn empty_table_uses_fallback_chain() {
        let responder = StaticResponder::new(QaTable::default(), person()).expect("empty table");
        assert!(responder.respond("hi").starts_with("Hello!"));
        assert!(responder.respond("help").starts_with("I can help"));
        assert!(responder.respond("").starts_with("I'd be happy"));
        assert!(responder.respond("   ").starts_with("I'd be happy"));
    }

    #[test]
    fn identical_keywords_tie_to_first_record() {
        let table = QaTable {
            records: vec![
                record("Q one?", "first", &["rust", "tokio"]),
                record("Q two?", "second", &["rust", "tokio"]),
            ],
            suggested_questions: Vec::new(),
        };
        let responder = StaticResponder::new(table, person()).expect("valid table");
        assert_eq!(responder.respond("rust and tokio"), "first");
    }

    #[test]
    fn exact_question_beats_single_keyword_elsewhere() {
        let table = QaTable {
            records: vec![
                record("Where are you?", "Somewhere.", &["contact"]),
                record("How can I contact you?", "By email.", &["email"]),
            ],
            suggested_questions: Vec::new(),
        };
        let responder = StaticResponder::new(table, person()).expect("valid table");
        assert_eq!(responder.respond("How can I contact you?"), "By email.");
    }

    #[test]
    fn templated_question_earns_bonus() {
        let table = QaTable {
            records: vec![
                record("Where is {first_name} based?", "In {location}.", &["based"]),
                record("Other?", "Other.", &["where", "is"]),
            ],
            suggested_questions: vec!["Where is {first_name} based?".to_string()],
        };
        let responder = StaticResponder::new(table, person()).expect("valid table");
        assert_eq!(responder.respond("where is ada based?"), "In London.");
        assert_eq!(responder.suggestions(), ["Where is Ada based?"]);
    }

    #[test]
    fn answers_are_templated() {
        let table = QaTable {
            records: vec![record("Contact?", "Mail {first_name} at {email}", &["mail"])],
            suggested_questions: Vec::new(),
        };
        let responder = StaticResponder::new(table, person()).expect("valid table");
        assert_eq!(responder.respond("mail"), "Mail Ada at ada@example.com");
    }

    #[test]
    fn replies_are_repeatable_and_non_empty() {
        let responder = StaticResponder::new(QaTable::bundled().expect("bundled table"), person())
            .expect("bundled table renders");
        for input in ["", "hello", "what skills do you have?", "\u{0}<b>", "zzz"] {
            let first = responder.respond(input);
            assert!(!first.is_empty());
            assert_eq!(first, responder.respond(input));
        }
    }

    #[test]
    fn records_keep_table_order() {
        let table = QaTable {
            records: vec![record("A?", "a", &["a"]), record("B?", "b", &["b"])],
            suggested_questions: Vec::new(),
        };
        let responder = StaticResponder::new(table, person()).expect("valid table");
        let questions: Vec<_> = responder.records().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, ["A?", "B?"]);
    }

    #[test]
    fn question_rendering_empty_is_rejected() {
        let table = QaTable {
            records: vec![
                record("What is your role?", "Engineer.", &["role"]),
                record(" {location} ", "Somewhere.", &["where"]),
            ],
            suggested_questions: Vec::new(),
        };
        let err = StaticResponder::new(table, PersonContext::new("Ada Lovelace", "Analyst"))
            .expect_err("blank rendered question must fail");
        assert!(matches!(err, PortfolioError::InvalidQa { index: 1, .. }));
    }

    #[test]
    fn question_with_filled_token_is_accepted() {
        let table = QaTable {
            records: vec![record("{location}", "Somewhere.", &["where"])],
            suggested_questions: Vec::new(),
        };
        let responder = StaticResponder::new(table, person()).expect("location is set");
        assert_eq!(responder.respond("in london?"), "Somewhere.");
        assert!(responder.respond("hello").starts_with("Hello!"));
    }
}
