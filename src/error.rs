// src/error.rs
use thiserror::Error;
use typeramp_export::ExportError;
use typeramp_style::SettingsIssue;

fn format_issues(issues: &[SettingsIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A comprehensive error type for loading settings and producing outputs.
#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Settings are out of range:\n{}", format_issues(.0))]
    InvalidSettings(Vec<SettingsIssue>),

    #[error("Unsupported preview content '{0}': convert it to HTML first")]
    UnsupportedContent(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
