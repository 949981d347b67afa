//! # exam-quiz
//!
//! Turns plain-text question banks into self-grading HTML quizzes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Parse a question bank, deriving the title from the file name
//!     let quiz = Quiz::from_path("practice-exam/aws-basics.md")?;
//!
//!     // Render it to a standalone page
//!     std::fs::write("aws-basics.html", quiz.render()?).unwrap();
//!
//!     Ok(())
//! }
//! ```
//!
//! The input looks like this:
//!
//! ```text
//! 1. Which service is serverless?
//! - A. EC2
//! - B. Lambda
//! - C. RDS
//! Correct answer: B
//! ```

pub mod data;
pub mod grading;
mod models;
pub mod parser;
pub mod render;

use std::io;
use std::path::{Path, PathBuf};

pub use grading::{canonical_form, grade, GradeReport, QuestionResult, Selections};
pub use models::{AnswerKey, AnswerOption, ControlKind, Label, Question};
pub use parser::{parse, parse_with_report, ParseReport};
pub use render::{render, RenderError};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// Rendering the quiz document failed.
    Render(RenderError),
    /// Writing a parse report as JSON failed.
    Report(serde_json::Error),
}

impl QuizError {
    /// Attach the path being read or written to an io error.
    pub fn io(path: &Path, source: io::Error) -> Self {
        QuizError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            QuizError::Render(e) => write!(f, "Failed to render quiz: {}", e),
            QuizError::Report(e) => write!(f, "Failed to serialise parse report: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io { source, .. } => Some(source),
            QuizError::Render(e) => Some(e),
            QuizError::Report(e) => Some(e),
        }
    }
}

impl From<RenderError> for QuizError {
    fn from(err: RenderError) -> Self {
        QuizError::Render(err)
    }
}

/// A titled, parsed question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Parse question-bank text. Blocks that are not questions are skipped.
    pub fn parse(title: impl Into<String>, text: &str) -> Self {
        Self::new(title, parse(text))
    }

    /// Load a quiz from a question-bank file, titled after the file name.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use exam_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_path("aws-saa-c03.md").expect("Failed to load quiz");
    /// assert_eq!(quiz.title(), "Aws Saa C03");
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let report = data::load_report_from_path(path)?;
        Ok(Self::new(data::derive_title(&stem), report.questions))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_key(&self) -> AnswerKey {
        AnswerKey::from_questions(&self.questions)
    }

    /// Render the quiz as a standalone HTML page.
    pub fn render(&self) -> Result<String, QuizError> {
        Ok(render(&self.questions, &self.title)?)
    }

    /// Score a set of selections the way the rendered page would.
    pub fn grade(&self, selections: &Selections) -> GradeReport {
        grade(selections, &self.answer_key())
    }
}
