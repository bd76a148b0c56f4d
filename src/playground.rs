// src/playground.rs
use crate::config::{load_settings_file, parse_settings, SettingsOverrides};
use crate::error::PlaygroundError;
use crate::preview::{render_preview, PreviewContent};
use std::fmt::Write;
use std::path::Path;
use typeramp_export::utils::{fmt_num, px};
use typeramp_export::{exporter_for, ExportFormat, ExportOptions};
use typeramp_ramp::{calculate, ComputedRamps};
use typeramp_style::{Length, TypographySettings};

/// A settings record together with the ramps computed from it.
///
/// Built once per change of settings; every output is derived from the same
/// computed ramps.
#[derive(Debug, Clone)]
pub struct Playground {
    settings: TypographySettings,
    ramps: ComputedRamps,
    export_options: ExportOptions,
}

impl Playground {
    /// Computes the ramps for `settings` without validating them.
    pub fn new(settings: TypographySettings) -> Self {
        let ramps = calculate(&settings);
        Self {
            settings,
            ramps,
            export_options: ExportOptions::default(),
        }
    }

    pub fn settings(&self) -> &TypographySettings {
        &self.settings
    }

    pub fn computed(&self) -> &ComputedRamps {
        &self.ramps
    }

    /// Replaces the settings and recomputes the ramps.
    pub fn update(&mut self, settings: TypographySettings) {
        self.ramps = calculate(&settings);
        self.settings = settings;
    }

    pub fn export(&self, format: ExportFormat) -> Result<String, PlaygroundError> {
        let exporter = exporter_for(format, self.export_options.clone());
        Ok(exporter.export(&self.settings, &self.ramps)?)
    }

    pub fn preview(&self, content: Option<&PreviewContent>) -> Result<String, PlaygroundError> {
        render_preview(&self.settings, &self.ramps, content)
    }

    /// A plain-text table of every level's size, weight and line height.
    pub fn summary(&self) -> Result<String, PlaygroundError> {
        let mut out = String::new();
        writeln!(out, "{:<6} {:>8} {:>8} {:>7}", "level", "size", "rem", "weight")?;
        for (level, size) in self.ramps.sizes.iter() {
            writeln!(
                out,
                "{:<6} {:>8} {:>8} {:>7}",
                level.tag(),
                px(*size),
                format!("{}rem", fmt_num(Length::px(*size).to_rem())),
                self.ramps.weight(level)
            )?;
        }
        writeln!(
            out,
            "{:<6} {:>8} {:>8} {:>7}",
            "body",
            px(self.ramps.base_size),
            format!("{}rem", fmt_num(Length::px(self.ramps.base_size).to_rem())),
            self.settings.body_weight
        )?;
        for bp in &self.ramps.responsive {
            let sizes: Vec<String> = bp.sizes.values().iter().map(|s| fmt_num(*s)).collect();
            writeln!(
                out,
                "{} (<= {}, x{}): body {}, headings {}",
                bp.name,
                px(bp.max_width),
                fmt_num(bp.scale),
                px(bp.base_size),
                sizes.join("/")
            )?;
        }
        Ok(out)
    }
}

/// A builder for creating a `Playground`.
pub struct PlaygroundBuilder {
    settings: Option<TypographySettings>,
    overrides: SettingsOverrides,
    export_options: ExportOptions,
    validate: bool,
}

impl Default for PlaygroundBuilder {
    fn default() -> Self {
        Self {
            settings: None,
            overrides: SettingsOverrides::default(),
            export_options: ExportOptions::default(),
            validate: true,
        }
    }
}

impl PlaygroundBuilder {
    /// Creates a new `PlaygroundBuilder` that starts from the default settings.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_settings(mut self, settings: TypographySettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Loads the settings from a `.json` file.
    pub fn with_settings_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PlaygroundError> {
        self.settings = Some(load_settings_file(path)?);
        Ok(self)
    }

    /// Parses the settings from a JSON string.
    pub fn with_settings_json(mut self, source: &str) -> Result<Self, PlaygroundError> {
        self.settings = Some(parse_settings(source)?);
        Ok(self)
    }

    /// Values applied on top of whichever settings are configured.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    /// Enables or disables range validation in `build` (on by default).
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Consumes the builder, applies overrides, validates and computes the ramps.
    pub fn build(self) -> Result<Playground, PlaygroundError> {
        let mut settings = self.settings.unwrap_or_else(|| {
            log::debug!("No settings configured, using defaults.");
            TypographySettings::default()
        });
        if !self.overrides.is_empty() {
            self.overrides.apply(&mut settings);
        }

        if self.validate {
            let issues = settings.validate();
            if !issues.is_empty() {
                return Err(PlaygroundError::InvalidSettings(issues));
            }
        }

        let mut playground = Playground::new(settings);
        playground.export_options = self.export_options;
        Ok(playground)
    }
}
