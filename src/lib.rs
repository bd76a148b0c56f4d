//! Typography scale playground.
//!
//! Computes heading size and weight ramps from a [`TypographySettings`]
//! record and renders them as CSS, SCSS, design-token JSON or an HTML
//! preview page.
//!
//! ```no_run
//! use typeramp::{ExportFormat, PlaygroundBuilder};
//!
//! let playground = PlaygroundBuilder::new()
//!     .with_settings_json(r#"{ "scaleRatio": "perfect-fourth" }"#)?
//!     .build()?;
//! println!("{}", playground.export(ExportFormat::Css)?);
//! # Ok::<(), typeramp::PlaygroundError>(())
//! ```

pub mod config;
pub mod error;
pub mod playground;
pub mod preview;

pub use config::{SettingsOverrides, default_settings_json, load_settings_file, parse_settings};
pub use error::PlaygroundError;
pub use playground::{Playground, PlaygroundBuilder};
pub use preview::{PreviewContent, render_preview};

pub use typeramp_export::{ExportError, ExportFormat, ExportOptions, Exporter};
pub use typeramp_ramp::{ComputedRamps, ResponsiveRamp, calculate};
pub use typeramp_style::{
    Breakpoint, FontStack, FontWeight, Fonts, Length, Responsive, ScaleMethod, ScaleRatio,
    SettingsIssue, Spacing, TypographySettings, WeightMethod,
};
pub use typeramp_types::{HeadingLevel, Ramp};
