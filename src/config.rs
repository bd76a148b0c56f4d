// src/config.rs
//! Loading settings documents and layering command-line overrides on top.

use crate::error::PlaygroundError;
use std::fs;
use std::io;
use std::path::Path;
use typeramp_style::{FontStack, Length, ScaleMethod, ScaleRatio, TypographySettings, WeightMethod};

/// Parses a JSON settings document. Missing fields take their defaults.
pub fn parse_settings(source: &str) -> Result<TypographySettings, PlaygroundError> {
    Ok(serde_json::from_str(source)?)
}

/// Reads a settings file. The format is chosen by extension; only `.json` is supported.
pub fn load_settings_file<P: AsRef<Path>>(path: P) -> Result<TypographySettings, PlaygroundError> {
    let path_ref = path.as_ref();
    let extension = path_ref.extension().and_then(|s| s.to_str()).unwrap_or("");
    if !extension.eq_ignore_ascii_case("json") {
        return Err(PlaygroundError::Config(format!(
            "Unsupported settings file extension: .{} (expected .json)",
            extension
        )));
    }

    let source = fs::read_to_string(path_ref).map_err(|e| {
        PlaygroundError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read settings from '{}': {}", path_ref.display(), e),
        ))
    })?;
    let settings = parse_settings(&source)?;
    log::info!("Loaded settings from {}", path_ref.display());
    Ok(settings)
}

/// The default settings as a pretty-printed JSON document.
pub fn default_settings_json() -> Result<String, PlaygroundError> {
    Ok(serde_json::to_string_pretty(&TypographySettings::default())?)
}

/// Individual values that replace whatever the settings document says.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub base_size: Option<Length>,
    pub scale_ratio: Option<ScaleRatio>,
    pub scale_method: Option<ScaleMethod>,
    pub weight_method: Option<WeightMethod>,
    pub heading_font: Option<FontStack>,
    pub body_font: Option<FontStack>,
    pub disable_responsive: bool,
}

impl SettingsOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Only the modular formula reads the ratio.
    fn ratio_has_no_effect(&self, settings: &TypographySettings) -> bool {
        self.scale_ratio.is_some() && settings.scale_method != ScaleMethod::Modular
    }

    pub fn apply(&self, settings: &mut TypographySettings) {
        if let Some(base_size) = self.base_size {
            settings.base_size = base_size;
        }
        if let Some(method) = self.scale_method {
            settings.scale_method = method;
        }
        if let Some(ratio) = self.scale_ratio {
            settings.scale_ratio = ratio;
            if self.ratio_has_no_effect(settings) {
                log::warn!(
                    "Scale ratio {} has no effect on the {} scale method",
                    ratio,
                    settings.scale_method
                );
            }
        }
        if let Some(method) = self.weight_method {
            settings.weight_method = method;
        }
        if let Some(stack) = &self.heading_font {
            settings.fonts.heading = stack.clone();
        }
        if let Some(stack) = &self.body_font {
            settings.fonts.body = stack.clone();
        }
        if self.disable_responsive {
            settings.responsive.enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_settings_accepts_partial_documents() {
        let settings = parse_settings(r#"{ "scaleMethod": "table", "baseSize": 18 }"#).unwrap();
        assert_eq!(settings.scale_method, ScaleMethod::Table);
        assert_eq!(settings.base_size, Length::px(18.0));
        assert_eq!(settings.base_line_height, 1.5);
    }

    #[test]
    fn test_parse_settings_reports_bad_values() {
        let err = parse_settings(r#"{ "scaleRatio": "steep" }"#).unwrap_err();
        assert!(matches!(err, PlaygroundError::Json(_)));
    }

    #[test]
    fn test_load_settings_file_checks_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "baseSize: 16").unwrap();
        assert!(matches!(
            load_settings_file(file.path()),
            Err(PlaygroundError::Config(_))
        ));
    }

    #[test]
    fn test_default_settings_round_trip() {
        let json = default_settings_json().unwrap();
        assert!(json.contains("\"scaleRatio\": \"major-third\""));
        assert_eq!(parse_settings(&json).unwrap(), TypographySettings::default());
    }

    #[test]
    fn test_overrides_replace_only_what_is_set() {
        let mut settings = TypographySettings::default();
        let overrides = SettingsOverrides {
            base_size: Some(Length::px(18.0)),
            heading_font: Some(FontStack::new("Fraunces", "serif")),
            disable_responsive: true,
            ..Default::default()
        };
        assert!(!overrides.is_empty());
        overrides.apply(&mut settings);

        assert_eq!(settings.base_size.to_px(), 18.0);
        assert_eq!(settings.fonts.heading.family, "Fraunces");
        assert_eq!(settings.fonts.body.family, "Inter");
        assert!(!settings.responsive.enabled);
        assert!(SettingsOverrides::default().is_empty());
    }

    #[test]
    fn test_ratio_checked_against_overridden_method() {
        let mut settings = TypographySettings::default();
        let overrides = SettingsOverrides {
            scale_ratio: Some(ScaleRatio::new(1.5)),
            scale_method: Some(ScaleMethod::Linear),
            ..Default::default()
        };
        assert!(!overrides.ratio_has_no_effect(&settings));
        overrides.apply(&mut settings);
        assert_eq!(settings.scale_method, ScaleMethod::Linear);
        assert_eq!(settings.scale_ratio.value(), 1.5);
        assert!(overrides.ratio_has_no_effect(&settings));

        let mut settings = TypographySettings {
            scale_method: ScaleMethod::Table,
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            scale_ratio: Some(ScaleRatio::new(1.5)),
            scale_method: Some(ScaleMethod::Modular),
            ..Default::default()
        };
        overrides.apply(&mut settings);
        assert!(!overrides.ratio_has_no_effect(&settings));
    }
}
