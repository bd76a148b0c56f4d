use crate::error::ExportError;
use crate::format::ExportFormat;
use typeramp_ramp::ComputedRamps;
use typeramp_style::TypographySettings;

/// A generator turning settings plus their computed ramps into one output document.
pub trait Exporter {
    fn format(&self) -> ExportFormat;

    fn export(
        &self,
        settings: &TypographySettings,
        ramps: &ComputedRamps,
    ) -> Result<String, ExportError>;
}

/// Options shared by every exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Namespace for custom-property and variable names, slugified
    /// (`"My Brand"` gives `--my-brand-font-size-h1`).
    pub prefix: Option<String>,
    /// Emit a leading comment describing the scale that produced the values.
    pub header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            header: true,
        }
    }
}

impl ExportOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Joins the slugified prefix (if any) and `name` with a hyphen.
    pub fn qualified(&self, name: &str) -> String {
        match self.prefix.as_deref().map(slug::slugify) {
            Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, name),
            _ => name.to_string(),
        }
    }
}
