//! Directory-to-directory conversion.

use std::fs;
use std::path::{Path, PathBuf};

use crate::render::render;
use crate::QuizError;

use super::loader::{derive_title, load_report_from_path};

pub const DEFAULT_INPUT_DIR: &str = "practice-exam";
pub const DEFAULT_OUTPUT_DIR: &str = "quizzes";
pub const DEFAULT_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Extension of question-bank files, without the dot.
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: QuizError,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    /// `(input, output)` pairs, in conversion order.
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<FailedFile>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts every question bank in `config.input_dir` into an HTML quiz.
///
/// A file that cannot be read, rendered or written is recorded in the
/// summary and the remaining files are still converted.
pub fn convert_dir(config: &BatchConfig) -> Result<BatchSummary, QuizError> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|source| QuizError::io(&config.output_dir, source))?;

    let mut summary = BatchSummary::default();
    for input in list_inputs(&config.input_dir, &config.extension)? {
        match convert_file(&input, &config.output_dir) {
            Ok(output) => {
                log::info!(
                    "Converted: {} -> {}",
                    file_name(&input),
                    file_name(&output)
                );
                summary.converted.push((input, output));
            }
            Err(error) => {
                log::error!("Failed to convert {}: {}", input.display(), error);
                summary.failed.push(FailedFile { path: input, error });
            }
        }
    }

    Ok(summary)
}

/// Converts one question bank into `<output_dir>/<stem>.html`, returning the output path.
pub fn convert_file(input: &Path, output_dir: &Path) -> Result<PathBuf, QuizError> {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let report = load_report_from_path(input)?;
    let html = render(&report.questions, &derive_title(&stem))?;

    let output = output_dir.join(format!("{}.html", stem));
    fs::write(&output, html).map_err(|source| QuizError::io(&output, source))?;
    Ok(output)
}

fn list_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, QuizError> {
    let entries = fs::read_dir(dir).map_err(|source| QuizError::io(dir, source))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| QuizError::io(dir, source))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            inputs.push(path);
        }
    }
    inputs.sort();

    Ok(inputs)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = "1. Which service is serverless?\n- A. EC2\n- B. Lambda\nCorrect answer: B\n";

    fn config(root: &Path) -> BatchConfig {
        BatchConfig {
            input_dir: root.join("practice-exam"),
            output_dir: root.join("out").join("quizzes"),
            ..BatchConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("practice-exam"));
        assert_eq!(config.output_dir, PathBuf::from("quizzes"));
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_converts_matching_files() {
        let root = tempfile::tempdir().unwrap();
        let config = config(root.path());
        fs::create_dir_all(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("aws-basics.md"), BANK).unwrap();
        fs::write(config.input_dir.join("notes.txt"), "ignored").unwrap();

        let summary = convert_dir(&config).unwrap();
        assert!(summary.is_success());
        assert_eq!(summary.converted.len(), 1);

        let output = config.output_dir.join("aws-basics.html");
        assert_eq!(summary.converted[0].1, output);

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<title>Aws Basics</title>"));
        assert!(html.contains(r#"{"q1":["B"]}"#));
    }

    #[test]
    fn test_bad_file_does_not_stop_batch() {
        let root = tempfile::tempdir().unwrap();
        let config = config(root.path());
        fs::create_dir_all(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("a-good.md"), BANK).unwrap();
        fs::write(config.input_dir.join("b-bad.md"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(config.input_dir.join("c-good.md"), BANK).unwrap();

        let summary = convert_dir(&config).unwrap();
        assert!(!summary.is_success());
        assert_eq!(summary.converted.len(), 2);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].path.ends_with("b-bad.md"));
        assert!(config.output_dir.join("c-good.html").exists());
    }

    #[test]
    fn test_missing_input_dir_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let config = config(root.path());

        assert!(matches!(convert_dir(&config), Err(QuizError::Io { .. })));
    }
}
