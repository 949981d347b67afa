use std::fmt;

use serde::Serialize;

/// Letter identifying an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Label {
    A,
    B,
    C,
    D,
    E,
}

impl Label {
    pub const ALL: [Label; 5] = [Label::A, Label::B, Label::C, Label::D, Label::E];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Label::A),
            'B' => Some(Label::B),
            'C' => Some(Label::C),
            'D' => Some(Label::D),
            'E' => Some(Label::E),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
            Label::D => 'D',
            Label::E => 'E',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Joins labels the way feedback text lists them: `A, C`.
pub fn join_labels<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a Label>,
{
    labels
        .into_iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
