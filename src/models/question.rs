use std::collections::BTreeSet;

use serde::Serialize;

use super::Label;

/// A single lettered option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: Label,
    pub text: String,
}

impl AnswerOption {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// How many options a question lets the user tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Exactly one option, rendered as radio buttons.
    Radio,
    /// Any number of options, rendered as checkboxes.
    Checkbox,
}

impl ControlKind {
    pub fn input_type(self) -> &'static str {
        match self {
            ControlKind::Radio => "radio",
            ControlKind::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    number: u32,
    prompt: String,
    options: Vec<AnswerOption>,
    correct_answers: BTreeSet<Label>,
}

impl Question {
    pub fn new(
        number: u32,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
        correct_answers: BTreeSet<Label>,
    ) -> Self {
        Self {
            number,
            prompt: prompt.into(),
            options,
            correct_answers,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    pub fn correct_answers(&self) -> &BTreeSet<Label> {
        &self.correct_answers
    }

    /// Identifier shared by the input group, the feedback anchor and the answer key.
    pub fn id(&self) -> String {
        format!("q{}", self.number)
    }

    pub fn is_multi_select(&self) -> bool {
        self.correct_answers.len() > 1
    }

    pub fn control(&self) -> ControlKind {
        if self.is_multi_select() {
            ControlKind::Checkbox
        } else {
            ControlKind::Radio
        }
    }

    pub fn has_option(&self, label: Label) -> bool {
        self.options.iter().any(|option| option.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_answers(answers: &[Label]) -> Question {
        let options = vec![
            AnswerOption::new(Label::A, "EC2"),
            AnswerOption::new(Label::B, "Lambda"),
            AnswerOption::new(Label::C, "RDS"),
        ];
        Question::new(7, "Pick", options, answers.iter().copied().collect())
    }

    #[test]
    fn test_id_uses_number() {
        assert_eq!(question_with_answers(&[Label::B]).id(), "q7");
    }

    #[test]
    fn test_control_follows_answer_count() {
        assert_eq!(question_with_answers(&[]).control(), ControlKind::Radio);
        assert_eq!(question_with_answers(&[Label::B]).control(), ControlKind::Radio);
        assert_eq!(
            question_with_answers(&[Label::A, Label::C]).control(),
            ControlKind::Checkbox
        );
    }

    #[test]
    fn test_has_option() {
        let question = question_with_answers(&[Label::B]);
        assert!(question.has_option(Label::C));
        assert!(!question.has_option(Label::D));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&question_with_answers(&[Label::B])).unwrap();
        assert!(json.contains("\"number\":7"));
        assert!(json.contains("\"correct_answers\":[\"B\"]"));
    }
}
