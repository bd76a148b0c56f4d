//! Output generators for computed typography ramps.
//!
//! This crate turns a [`TypographySettings`] record and its [`ComputedRamps`]
//! into one of three documents:
//! - `CssExporter`: custom properties, element rules and media queries
//! - `ScssExporter`: variables, maps and a breakpoint mixin
//! - `TokensExporter`: a design-token JSON tree

mod error;
mod format;
mod traits;
pub mod css;
pub mod scss;
pub mod tokens;
pub mod utils;

pub use css::CssExporter;
pub use error::ExportError;
pub use format::ExportFormat;
pub use scss::ScssExporter;
pub use tokens::TokensExporter;
pub use traits::{ExportOptions, Exporter};

use typeramp_ramp::ComputedRamps;
use typeramp_style::TypographySettings;

/// Returns the generator for `format`.
pub fn exporter_for(format: ExportFormat, options: ExportOptions) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Css => Box::new(CssExporter::new(options)),
        ExportFormat::Scss => Box::new(ScssExporter::new(options)),
        ExportFormat::Json => Box::new(TokensExporter::new(options)),
    }
}

/// Renders `format` with default options.
pub fn export(
    format: ExportFormat,
    settings: &TypographySettings,
    ramps: &ComputedRamps,
) -> Result<String, ExportError> {
    exporter_for(format, ExportOptions::default()).export(settings, ramps)
}
