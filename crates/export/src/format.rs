use crate::error::ExportError;
use std::fmt;
use std::str::FromStr;

/// The output documents the playground can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Plain CSS with custom properties and media queries.
    #[default]
    Css,
    /// SCSS variables, maps and a breakpoint mixin.
    Scss,
    /// A design-token JSON document.
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Css, ExportFormat::Scss, ExportFormat::Json];

    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
        }
    }

    /// Picks a format from an output path's extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        extension.parse().ok()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" | "sass" => Ok(ExportFormat::Scss),
            "json" | "tokens" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}
