mod batch;
mod loader;

pub use batch::{
    convert_dir, convert_file, BatchConfig, BatchSummary, FailedFile, DEFAULT_EXTENSION,
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};
pub use loader::{derive_title, load_report_from_path, report_json};
