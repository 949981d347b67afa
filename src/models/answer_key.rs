use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Label, Question};

/// Correct label sets keyed by question id, in question order.
///
/// Built once per rendered document and handed to whoever grades it. Serialises
/// to a JSON object whose keys keep insertion order, so the embedded script
/// walks questions in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    entries: Vec<(String, BTreeSet<Label>)>,
}

impl AnswerKey {
    pub fn from_questions(questions: &[Question]) -> Self {
        let entries = questions
            .iter()
            .map(|question| (question.id(), question.correct_answers().clone()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&BTreeSet<Label>> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, labels)| labels)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Label>)> {
        self.entries
            .iter()
            .map(|(key, labels)| (key.as_str(), labels))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AnswerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, labels) in &self.entries {
            map.serialize_entry(key, labels)?;
        }
        map.end()
    }
}
