pub mod fixtures;

use std::io::Write;
use tempfile::NamedTempFile;
use typeramp::{Playground, PlaygroundBuilder, PlaygroundError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a validated playground from a JSON settings document.
pub fn playground_from_json(json: &serde_json::Value) -> Result<Playground, PlaygroundError> {
    PlaygroundBuilder::new()
        .with_settings_json(&serde_json::to_string(json)?)?
        .build()
}

/// Writes `contents` to a temporary file ending in `suffix`.
pub fn temp_file(suffix: &str, contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
