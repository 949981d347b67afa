use std::fs;
use std::path::Path;

use crate::parser::{parse_with_report, ParseReport};
use crate::QuizError;

/// Reads and parses a question-bank file.
pub fn load_report_from_path<P: AsRef<Path>>(path: P) -> Result<ParseReport, QuizError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| QuizError::io(path, source))?;
    let report = parse_with_report(&text);

    if !report.skipped.is_empty() {
        log::warn!(
            "{}: skipped {} block(s) that are not questions",
            path.display(),
            report.skipped.len()
        );
    }
    for warning in &report.warnings {
        log::debug!("{}: {}", path.display(), warning);
    }

    Ok(report)
}

/// Parses a question-bank file and returns its report as pretty JSON.
pub fn report_json<P: AsRef<Path>>(path: P) -> Result<String, QuizError> {
    let report = load_report_from_path(path)?;
    serde_json::to_string_pretty(&report).map_err(QuizError::Report)
}

/// Turns a file stem like `aws-saa-c03` into a display title like `Aws Saa C03`.
pub fn derive_title(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut previous_is_letter = false;

    for c in stem.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if previous_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            title.push(c);
            previous_is_letter = false;
        }
    }

    title
}
