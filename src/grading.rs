//! Scoring of a set of selections against an [`AnswerKey`].
//!
//! This is the same algorithm the rendered document runs in the browser,
//! and produces the same feedback text.

use std::collections::{BTreeSet, HashMap};

use crate::models::{join_labels, AnswerKey, Label};

/// Feedback for a question answered correctly.
pub const CORRECT_FEEDBACK: &str = "✅ Correct";
/// Feedback prefix for a wrong answer, followed by the correct labels.
pub const INCORRECT_FEEDBACK: &str = "❌ Incorrect. Correct answer(s): ";
/// Summary prefix, followed by `<score> / <total>`.
pub const SCORE_PREFIX: &str = "Your Score: ";

/// Labels the user ticked, keyed by question id. A missing id means nothing was ticked.
pub type Selections = HashMap<String, Vec<Label>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub id: String,
    pub correct: bool,
    pub expected: BTreeSet<Label>,
}

impl QuestionResult {
    pub fn feedback(&self) -> String {
        if self.correct {
            CORRECT_FEEDBACK.to_string()
        } else {
            format!("{}{}", INCORRECT_FEEDBACK, join_labels(&self.expected))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    pub results: Vec<QuestionResult>,
    pub score: usize,
    pub total: usize,
}

impl GradeReport {
    pub fn summary(&self) -> String {
        format!("{}{} / {}", SCORE_PREFIX, self.score, self.total)
    }

    pub fn result(&self, id: &str) -> Option<&QuestionResult> {
        self.results.iter().find(|result| result.id == id)
    }
}

/// Sorted, concatenated labels. Equal label sets always give equal strings.
pub fn canonical_form<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a Label>,
{
    let mut chars: Vec<char> = labels.into_iter().map(|label| label.as_char()).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

pub fn grade(selections: &Selections, key: &AnswerKey) -> GradeReport {
    let results: Vec<QuestionResult> = key
        .iter()
        .map(|(id, expected)| {
            let selected = selections.get(id).map(Vec::as_slice).unwrap_or_default();
            QuestionResult {
                id: id.to_string(),
                correct: canonical_form(selected) == canonical_form(expected),
                expected: expected.clone(),
            }
        })
        .collect();

    let score = results.iter().filter(|result| result.correct).count();

    GradeReport {
        results,
        score,
        total: key.len(),
    }
}
