use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identifier of a catalog question.
pub type QuestionId = i64;

/// Zero-based index into a question's option list.
pub type OptionIndex = i32;

/// One participant's complete question -> chosen option mapping.
pub type AnswerSet = HashMap<QuestionId, OptionIndex>;

/// A survey question with its ordered option labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new(id: QuestionId, text: &str, options: &[&str]) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Snapshot of the active question catalog at query time
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub question_ids: Vec<QuestionId>,
}

impl Catalog {
    pub fn new(question_ids: Vec<QuestionId>) -> Self {
        Self { question_ids }
    }

    pub fn total_questions(&self) -> usize {
        self.question_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question_ids.is_empty()
    }
}

/// One participant's identity plus their stored answer set
#[derive(Debug, Clone)]
pub struct ParticipantAnswers {
    pub name: String,
    pub answers: AnswerSet,
}

/// Participant listing entry with how many answers they have on record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: i64,
    pub name: String,
    pub answer_count: i64,
}

/// Ranked match for a single participant, against one other participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub participant: String,
    pub similarity: u8,
    pub identical_answers: usize,
    pub total_questions: usize,
}

/// Compatibility of one unordered pair in the group-wide query.
/// `participants` holds the pair's names in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMatch {
    pub participants: [String; 2],
    pub similarity: u8,
    pub identical_answers: usize,
    pub total_questions: usize,
}
