use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use exam_quiz::data::{self, BatchConfig};
use exam_quiz::{render, QuizError};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every question bank in a directory into an HTML quiz
    Build {
        /// Directory containing the question banks
        #[arg(short, long, default_value = data::DEFAULT_INPUT_DIR)]
        input: PathBuf,

        /// Directory the quizzes are written to
        #[arg(short, long, default_value = data::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Extension of question-bank files
        #[arg(short, long, default_value = data::DEFAULT_EXTENSION)]
        extension: String,
    },

    /// Convert a single question bank
    Render {
        /// Question-bank file
        file: PathBuf,

        /// Page title, derived from the file name when omitted
        #[arg(short, long)]
        title: Option<String>,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print what the parser makes of a question bank, as JSON
    Inspect {
        /// Question-bank file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let args = Args::parse();
    let result = match args.command {
        Command::Build {
            input,
            output,
            extension,
        } => build(BatchConfig {
            input_dir: input,
            output_dir: output,
            extension,
        }),
        Command::Render {
            file,
            title,
            output,
        } => render_one(file, title, output),
        Command::Inspect { file } => inspect(file),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn build(config: BatchConfig) -> Result<ExitCode, QuizError> {
    let summary = data::convert_dir(&config)?;
    log::info!(
        "{} converted, {} failed",
        summary.converted.len(),
        summary.failed.len()
    );

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn render_one(
    file: PathBuf,
    title: Option<String>,
    output: Option<PathBuf>,
) -> Result<ExitCode, QuizError> {
    let title = title.unwrap_or_else(|| {
        let stem = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        data::derive_title(&stem)
    });

    let report = data::load_report_from_path(&file)?;
    let html = render(&report.questions, &title)?;

    match output {
        Some(path) => {
            fs::write(&path, html).map_err(|source| QuizError::io(&path, source))?;
            log::info!("Converted: {} -> {}", file.display(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(ExitCode::SUCCESS)
}

fn inspect(file: PathBuf) -> Result<ExitCode, QuizError> {
    println!("{}", data::report_json(&file)?);

    Ok(ExitCode::SUCCESS)
}
