mod answer_key;
mod label;
mod question;

pub use answer_key::AnswerKey;
pub use label::{join_labels, Label};
pub use question::{AnswerOption, ControlKind, Question};
