//! Line classifier for question-bank text.
//!
//! Every line of input falls into exactly one [`LineKind`]. The block builder
//! only ever looks at classified lines, never at raw text.

use crate::models::Label;

const ANSWER_MARKER: &str = "Correct answer: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `<digits>. <prompt>` at the start of a line. `number` is `None` when
    /// the digits overflow.
    Header { number: Option<u32>, prompt: &'a str },
    /// `- <LABEL>. <text>`
    Option { label: Label, text: &'a str },
    /// `... Correct answer: A, C ...`, always with at least one label. At most
    /// one whitespace character may follow each comma.
    Answer(Vec<Label>),
    Other,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(header) = header(line) {
        return header;
    }
    if let Some(option) = option(line) {
        return option;
    }
    match answer_labels(line) {
        Some(labels) => LineKind::Answer(labels),
        None => LineKind::Other,
    }
}

pub fn is_header(line: &str) -> bool {
    matches!(classify(line), LineKind::Header { .. })
}

fn header(line: &str) -> Option<LineKind<'_>> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let rest = line[digits_end..].strip_prefix('.')?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(LineKind::Header {
        number: line[..digits_end].parse().ok(),
        prompt: rest.trim(),
    })
}

fn option(line: &str) -> Option<LineKind<'_>> {
    let rest = line.trim_start().strip_prefix("- ")?;
    let mut chars = rest.chars();
    let label = Label::from_char(chars.next()?)?;
    let rest = chars.as_str().strip_prefix('.')?;

    let mut chars = rest.chars();
    if !chars.next()?.is_whitespace() {
        return None;
    }
    let text = chars.as_str().trim_end();
    if text.is_empty() {
        return None;
    }

    Some(LineKind::Option { label, text })
}

fn answer_labels(line: &str) -> Option<Vec<Label>> {
    let start = line.find(ANSWER_MARKER)? + ANSWER_MARKER.len();
    let mut chars = line[start..].chars().peekable();
    let mut labels = vec![Label::from_char(chars.next()?)?];

    loop {
        let mut lookahead = chars.clone();
        if lookahead.next() != Some(',') {
            break;
        }
        lookahead.next_if(|c| c.is_whitespace());
        match lookahead.next().and_then(Label::from_char) {
            Some(label) => {
                labels.push(label);
                chars = lookahead;
            }
            None => break,
        }
    }

    Some(labels)
}
