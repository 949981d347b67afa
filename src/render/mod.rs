//! HTML quiz renderer.
//!
//! Produces a single self-contained page: the questions as a form, the answer
//! key and feedback text as JSON data islands and a small script that grades
//! the form in place.

mod document;
mod script;

use std::fmt;

use crate::models::{AnswerKey, Question};

pub use document::{Escaped, QuizDocument};

#[derive(Debug)]
pub enum RenderError {
    /// The answer key or the feedback text could not be serialised.
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Json(e) => write!(f, "Failed to serialise quiz data: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err)
    }
}

pub fn render(questions: &[Question], title: &str) -> Result<String, RenderError> {
    let answer_key = serde_json::to_string(&AnswerKey::from_questions(questions))?;
    let messages = serde_json::to_string(&script::MESSAGES)?;

    let document = QuizDocument {
        title,
        questions,
        answer_key: &answer_key,
        messages: &messages,
    };
    Ok(document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const SERVERLESS: &str = "\
1. Which service is serverless?
- A. EC2
- B. Lambda
- C. RDS
Correct answer: B
";

    fn render_text(text: &str) -> String {
        render(&parse(text), "AWS Practice Exam").unwrap()
    }

    #[test]
    fn test_single_select_markup() {
        let html = render_text(SERVERLESS);

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>AWS Practice Exam</title>"));
        assert!(html.contains("<div class=\"question\" id=\"q1-container\">"));
        assert!(html.contains("<p><strong>1. Which service is serverless?</strong></p>"));
        assert!(html.contains(
            "<label><input type=\"radio\" name=\"q1\" value=\"B\"> B. Lambda</label><br>"
        ));
        assert!(html.contains("<p id=\"q1-feedback\" class=\"feedback\"></p>"));
        assert_eq!(html.matches("type=\"radio\"").count(), 3);
        assert!(!html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_multi_select_uses_checkboxes() {
        let html = render_text("2. Pick two\n- A. a\n- B. b\n- C. c\n- D. d\nCorrect answer: A, C\n");
        assert_eq!(html.matches("type=\"checkbox\" name=\"q2\"").count(), 4);
        assert!(!html.contains("type=\"radio\""));
    }

    #[test]
    fn test_control_kind_per_question() {
        let text = "\
1. one
- A. a
- B. b
Correct answer: A
2. two
- A. a
- B. b
Correct answer: A, B
3. none
- A. a
";
        let html = render_text(text);
        assert_eq!(html.matches("type=\"radio\" name=\"q1\"").count(), 2);
        assert_eq!(html.matches("type=\"checkbox\" name=\"q2\"").count(), 2);
        assert_eq!(html.matches("type=\"radio\" name=\"q3\"").count(), 1);
    }

    #[test]
    fn test_embeds_answer_key_and_script() {
        let html = render_text("3. a\n- A. x\nCorrect answer: A\n1. b\n- A. x\n- B. y\nCorrect answer: B, A\n");
        assert!(html.contains(
            r#"<script type="application/json" id="answer-key">{"q3":["A"],"q1":["A","B"]}</script>"#
        ));
        assert!(html.contains("function grade(answerKey, messages)"));
        assert!(html.contains("<button type=\"button\" id=\"submit\">Submit</button>"));
        assert!(html.contains("<p id=\"result\" class=\"summary\"></p>"));
        assert!(!html.contains("http"));
    }

    #[test]
    fn test_script_reads_feedback_shared_with_grading() {
        use crate::grading::{grade, Selections};
        use crate::models::Label;

        let questions = parse(SERVERLESS);
        let html = render(&questions, "t").unwrap();
        let messages = format!(
            r#"<script type="application/json" id="quiz-messages">{}</script>"#,
            serde_json::to_string(&script::MESSAGES).unwrap()
        );
        assert!(html.contains(&messages));
        assert!(html.contains(r#""correct":"✅ Correct""#));
        assert!(html.contains(r#""incorrect":"❌ Incorrect. Correct answer(s): ""#));
        assert!(html.contains(r#""score":"Your Score: ""#));

        // The script builds its text from the island, never from literals of its own.
        assert!(script::GRADING_SCRIPT.contains("messages.correct"));
        assert!(script::GRADING_SCRIPT.contains("messages.incorrect + correct.join(\", \")"));
        assert!(script::GRADING_SCRIPT.contains("messages.score + score + \" / \" + ids.length"));
        assert!(!script::GRADING_SCRIPT.contains("Correct answer(s)"));
        assert!(!script::GRADING_SCRIPT.contains("Your Score"));

        let key = AnswerKey::from_questions(&questions);
        let wrong = grade(&Selections::from([("q1".to_string(), vec![Label::A])]), &key);
        assert_eq!(
            wrong.results[0].feedback(),
            format!("{}{}", script::MESSAGES.incorrect, "B")
        );
        assert_eq!(wrong.summary(), format!("{}0 / 1", script::MESSAGES.score));
    }

    #[test]
    fn test_question_without_options_has_no_inputs() {
        let html = render_text("4. Describe it\nCorrect answer: A\n");
        assert!(html.contains("id=\"q4-container\""));
        assert!(!html.contains("<input"));
        assert!(html.contains(r#"{"q4":["A"]}"#));
    }

    #[test]
    fn test_free_text_is_escaped() {
        let questions = parse(
            "1. Is <script>alert(1)</script> safe?\n- A. x < y & \"z\"\nCorrect answer: A\n",
        );
        let html = render(&questions, "Tips & <Tricks>").unwrap();
        assert!(html.contains("<title>Tips &amp; &lt;Tricks&gt;</title>"));
        assert!(html.contains("1. Is &lt;script&gt;alert(1)&lt;/script&gt; safe?"));
        assert!(html.contains("A. x &lt; y &amp; &quot;z&quot;</label>"));
        assert_eq!(html.matches("<script").count(), 3);
    }

    #[test]
    fn test_empty_quiz() {
        let html = render(&[], "Empty").unwrap();
        assert!(html.contains(r#"id="answer-key">{}</script>"#));
        assert!(!html.contains("class=\"question\""));
    }
}
