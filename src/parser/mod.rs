//! Question-bank parser.
//!
//! Input is split into blocks at each numbered header line; every block is
//! turned into a [`Question`] on its own. Blocks that cannot be turned into a
//! question are dropped without failing the rest of the input.

mod lines;

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::models::{AnswerOption, Label, Question};

pub use lines::{classify, LineKind};

/// Why a block produced no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Text before the first numbered header.
    MissingHeader,
    /// Header digits do not fit a question number.
    InvalidNumber,
    /// An earlier block already used this question number.
    DuplicateNumber(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBlock {
    /// 1-based line in the original input where the block starts.
    pub line: usize,
    pub reason: SkipReason,
}

/// Non-fatal oddities found in a question that was still emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseWarning {
    MissingAnswer { number: u32 },
    DuplicateOption { number: u32, label: Label },
    UnknownAnswerLabel { number: u32, label: Label },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::MissingAnswer { number } => {
                write!(f, "question {} has no correct answer", number)
            }
            ParseWarning::DuplicateOption { number, label } => {
                write!(f, "question {} repeats option {}", number, label)
            }
            ParseWarning::UnknownAnswerLabel { number, label } => write!(
                f,
                "question {} marks {} correct but has no such option",
                number, label
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedBlock>,
    pub warnings: Vec<ParseWarning>,
}

/// Parses question-bank text, silently dropping blocks that are not questions.
pub fn parse(text: &str) -> Vec<Question> {
    parse_with_report(text).questions
}

/// Like [`parse`], but also reports what was skipped and why.
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut seen = HashSet::new();

    for block in split_blocks(text) {
        let skip = |reason| SkippedBlock {
            line: block.start_line,
            reason,
        };

        let (question, warnings) = match build_question(&block) {
            Ok(built) => built,
            Err(reason) => {
                report.skipped.push(skip(reason));
                continue;
            }
        };

        if !seen.insert(question.number()) {
            report
                .skipped
                .push(skip(SkipReason::DuplicateNumber(question.number())));
            continue;
        }

        report.questions.push(question);
        report.warnings.extend(warnings);
    }

    report
}

struct Block<'a> {
    start_line: usize,
    lines: Vec<&'a str>,
}

fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let leading_lines = text[..text.len() - text.trim_start().len()]
        .matches('\n')
        .count();

    let mut blocks: Vec<Block> = Vec::new();
    for (index, line) in trimmed.lines().enumerate() {
        if blocks.is_empty() || lines::is_header(line) {
            blocks.push(Block {
                start_line: leading_lines + index + 1,
                lines: vec![line],
            });
        } else if let Some(block) = blocks.last_mut() {
            block.lines.push(line);
        }
    }

    blocks
}

/// Builds the block's question along with the warnings that belong to it.
fn build_question(block: &Block) -> Result<(Question, Vec<ParseWarning>), SkipReason> {
    let (number, prompt) = match block.lines.first().map(|line| lines::classify(line)) {
        Some(LineKind::Header {
            number: Some(number),
            prompt,
        }) => (number, prompt),
        Some(LineKind::Header { number: None, .. }) => return Err(SkipReason::InvalidNumber),
        _ => return Err(SkipReason::MissingHeader),
    };

    let mut warnings = Vec::new();
    let mut labels = HashSet::new();
    let mut options = Vec::new();
    let mut answers: Option<Vec<Label>> = None;

    for line in &block.lines[1..] {
        match lines::classify(line) {
            LineKind::Option { label, text } => {
                if labels.insert(label) {
                    options.push(AnswerOption::new(label, text));
                } else {
                    warnings.push(ParseWarning::DuplicateOption { number, label });
                }
            }
            LineKind::Answer(found) if answers.is_none() => answers = Some(found),
            _ => {}
        }
    }

    let correct_answers: BTreeSet<Label> = answers.unwrap_or_default().into_iter().collect();
    let question = Question::new(number, prompt, options, correct_answers);

    if question.correct_answers().is_empty() {
        warnings.push(ParseWarning::MissingAnswer { number });
    }
    for &label in question.correct_answers() {
        if !question.has_option(label) {
            warnings.push(ParseWarning::UnknownAnswerLabel { number, label });
        }
    }

    Ok((question, warnings))
}
