//! Defines the top-level typography settings record that every calculator
//! and exporter reads from.

use crate::dimension::Length;
use crate::font::{FontStack, FontWeight, PartialFontStack};
use crate::scale::{ScaleMethod, ScaleRatio, WeightMethod};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use typeramp_types::Ramp;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographySettings {
    // Body
    pub base_size: Length,
    pub base_line_height: f32,
    pub heading_line_height: f32,
    pub body_weight: FontWeight,

    // Size ramp
    pub scale_method: ScaleMethod,
    pub scale_ratio: ScaleRatio,
    pub linear_min: Length,
    pub linear_max: Length,
    pub custom_sizes: Ramp<Length>,

    // Weight ramp
    pub weight_method: WeightMethod,
    pub heading_weight: FontWeight,
    pub weight_min: FontWeight,
    pub weight_max: FontWeight,
    pub custom_weights: Ramp<FontWeight>,

    pub fonts: Fonts,
    pub spacing: Spacing,
    pub responsive: Responsive,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            base_size: Length::px(16.0),
            base_line_height: 1.5,
            heading_line_height: 1.2,
            body_weight: FontWeight::Regular,
            scale_method: ScaleMethod::Modular,
            scale_ratio: ScaleRatio::default(),
            linear_min: Length::px(16.0),
            linear_max: Length::px(40.0),
            custom_sizes: Ramp::new([40.0, 32.0, 26.0, 20.0, 18.0, 16.0].map(Length::px)),
            weight_method: WeightMethod::Uniform,
            heading_weight: FontWeight::Bold,
            weight_min: FontWeight::Medium,
            weight_max: FontWeight::ExtraBold,
            custom_weights: Ramp::new([800, 700, 700, 600, 600, 600].map(FontWeight::Numeric)),
            fonts: Fonts::default(),
            spacing: Spacing::default(),
            responsive: Responsive::default(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fonts {
    pub heading: FontStack,
    pub body: FontStack,
    pub code: FontStack,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            heading: FontStack::sans("Inter"),
            body: FontStack::sans("Inter"),
            code: FontStack::monospace("JetBrains Mono"),
        }
    }
}

/// A stack written without a fallback keeps the fallback of its slot's default.
impl<'de> Deserialize<'de> for Fonts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct FontsDef {
            heading: Option<PartialFontStack>,
            body: Option<PartialFontStack>,
            code: Option<PartialFontStack>,
        }

        fn merge(slot: Option<PartialFontStack>, default: FontStack) -> FontStack {
            match slot {
                Some(stack) => stack.or_fallback(&default.fallback),
                None => default,
            }
        }

        let def = FontsDef::deserialize(deserializer)?;
        let defaults = Fonts::default();
        Ok(Fonts {
            heading: merge(def.heading, defaults.heading),
            body: merge(def.body, defaults.body),
            code: merge(def.code, defaults.code),
        })
    }
}

/// Vertical rhythm and tracking, all in `em`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacing {
    pub paragraph: f32,
    pub heading_top: f32,
    pub heading_bottom: f32,
    pub letter_spacing: f32,
    pub heading_letter_spacing: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            paragraph: 1.0,
            heading_top: 1.5,
            heading_bottom: 0.5,
            letter_spacing: 0.0,
            heading_letter_spacing: -0.01,
        }
    }
}

/// A `max-width` viewport threshold and the factor applied to sizes below it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub max_width: Length,
    pub scale: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Responsive {
    pub enabled: bool,
    pub tablet: Breakpoint,
    pub mobile: Breakpoint,
}

impl Default for Responsive {
    fn default() -> Self {
        Self {
            enabled: true,
            tablet: Breakpoint {
                max_width: Length::px(1024.0),
                scale: 0.9,
            },
            mobile: Breakpoint {
                max_width: Length::px(640.0),
                scale: 0.8,
            },
        }
    }
}

/// Each breakpoint merges over its own default, so a document may set only
/// the values it changes.
impl<'de> Deserialize<'de> for Responsive {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct BreakpointDef {
            max_width: Option<Length>,
            scale: Option<f32>,
        }

        #[derive(Deserialize)]
        struct ResponsiveDef {
            enabled: Option<bool>,
            tablet: Option<BreakpointDef>,
            mobile: Option<BreakpointDef>,
        }

        fn merge(def: Option<BreakpointDef>, default: Breakpoint) -> Breakpoint {
            match def {
                Some(def) => Breakpoint {
                    max_width: def.max_width.unwrap_or(default.max_width),
                    scale: def.scale.unwrap_or(default.scale),
                },
                None => default,
            }
        }

        let def = ResponsiveDef::deserialize(deserializer)?;
        let defaults = Responsive::default();
        Ok(Responsive {
            enabled: def.enabled.unwrap_or(defaults.enabled),
            tablet: merge(def.tablet, defaults.tablet),
            mobile: merge(def.mobile, defaults.mobile),
        })
    }
}

impl Responsive {
    /// The breakpoints that produce overrides, widest first. Empty when disabled.
    pub fn active_breakpoints(&self) -> Vec<(&'static str, Breakpoint)> {
        if !self.enabled {
            return Vec::new();
        }
        vec![("tablet", self.tablet), ("mobile", self.mobile)]
    }
}

/// A single range problem found by [`TypographySettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsIssue {
    pub field: String,
    pub message: String,
}

impl SettingsIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SettingsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn weight_in_range(weight: FontWeight) -> bool {
    (1..=1000).contains(&weight.numeric_value())
}

impl TypographySettings {
    /// Checks the range constraints the calculators assume.
    ///
    /// Method-specific fields are only checked for the selected method.
    pub fn validate(&self) -> Vec<SettingsIssue> {
        let mut issues = Vec::new();

        if !positive(self.base_size.to_px()) {
            issues.push(SettingsIssue::new("baseSize", "must be greater than 0"));
        }
        if !positive(self.base_line_height) {
            issues.push(SettingsIssue::new("baseLineHeight", "must be greater than 0"));
        }
        if !positive(self.heading_line_height) {
            issues.push(SettingsIssue::new("headingLineHeight", "must be greater than 0"));
        }
        if !weight_in_range(self.body_weight) {
            issues.push(SettingsIssue::new("bodyWeight", "must be between 1 and 1000"));
        }

        match self.scale_method {
            ScaleMethod::Modular => {
                let ratio = self.scale_ratio.value();
                if !(ratio.is_finite() && ratio > 1.0) {
                    issues.push(SettingsIssue::new("scaleRatio", "must be greater than 1"));
                }
            }
            ScaleMethod::Linear => {
                let (min, max) = (self.linear_min.to_px(), self.linear_max.to_px());
                if !positive(min) {
                    issues.push(SettingsIssue::new("linearMin", "must be greater than 0"));
                }
                if !(min < max) {
                    issues.push(SettingsIssue::new("linearMax", "must be greater than linearMin"));
                }
            }
            ScaleMethod::Table => {}
            ScaleMethod::Custom => {
                for (level, size) in self.custom_sizes.iter() {
                    if !positive(size.to_px()) {
                        issues.push(SettingsIssue::new(
                            format!("customSizes.{}", level),
                            "must be greater than 0",
                        ));
                    }
                }
            }
        }

        match self.weight_method {
            WeightMethod::Uniform => {
                if !weight_in_range(self.heading_weight) {
                    issues.push(SettingsIssue::new("headingWeight", "must be between 1 and 1000"));
                }
            }
            WeightMethod::Linear => {
                let (min, max) = (self.weight_min.numeric_value(), self.weight_max.numeric_value());
                if !weight_in_range(self.weight_min) {
                    issues.push(SettingsIssue::new("weightMin", "must be between 1 and 1000"));
                }
                if !weight_in_range(self.weight_max) {
                    issues.push(SettingsIssue::new("weightMax", "must be between 1 and 1000"));
                }
                if min >= max {
                    issues.push(SettingsIssue::new("weightMax", "must be greater than weightMin"));
                }
            }
            WeightMethod::Custom => {
                for (level, weight) in self.custom_weights.iter() {
                    if !weight_in_range(*weight) {
                        issues.push(SettingsIssue::new(
                            format!("customWeights.{}", level),
                            "must be between 1 and 1000",
                        ));
                    }
                }
            }
        }

        let spacing = [
            ("spacing.paragraph", self.spacing.paragraph),
            ("spacing.headingTop", self.spacing.heading_top),
            ("spacing.headingBottom", self.spacing.heading_bottom),
        ];
        for (field, value) in spacing {
            if !non_negative(value) {
                issues.push(SettingsIssue::new(field, "must not be negative"));
            }
        }

        for (field, stack) in [
            ("fonts.heading", &self.fonts.heading),
            ("fonts.body", &self.fonts.body),
            ("fonts.code", &self.fonts.code),
        ] {
            if stack.family.trim().is_empty() {
                issues.push(SettingsIssue::new(field, "family must not be empty"));
            }
        }

        if self.responsive.enabled {
            for (name, bp) in self.responsive.active_breakpoints() {
                if !positive(bp.max_width.to_px()) {
                    issues.push(SettingsIssue::new(
                        format!("responsive.{}.maxWidth", name),
                        "must be greater than 0",
                    ));
                }
                if !(positive(bp.scale) && bp.scale <= 1.0) {
                    issues.push(SettingsIssue::new(
                        format!("responsive.{}.scale", name),
                        "must be in (0, 1]",
                    ));
                }
            }
            if self.responsive.mobile.max_width >= self.responsive.tablet.max_width {
                issues.push(SettingsIssue::new(
                    "responsive.mobile.maxWidth",
                    "must be narrower than responsive.tablet.maxWidth",
                ));
            }
        }

        issues
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeramp_types::HeadingLevel;

    #[test]
    fn test_defaults_are_valid() {
        let settings = TypographySettings::default();
        assert_eq!(settings.validate(), Vec::new());
        assert!(settings.is_valid());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: TypographySettings = serde_json::from_str(
            r#"{
                "baseSize": "18px",
                "scaleRatio": "perfect-fourth",
                "fonts": { "heading": "'Playfair Display', serif" },
                "responsive": { "enabled": false }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.base_size.to_px(), 18.0);
        assert_eq!(settings.scale_ratio.value(), 1.333);
        assert_eq!(settings.fonts.heading.family, "Playfair Display");
        assert_eq!(settings.fonts.body, FontStack::sans("Inter"));
        assert!(!settings.responsive.enabled);
        assert_eq!(settings.responsive.tablet.scale, 0.9);
        assert!(settings.responsive.active_breakpoints().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let settings = TypographySettings {
            base_size: Length::px(0.0),
            scale_method: ScaleMethod::Linear,
            linear_min: Length::px(40.0),
            linear_max: Length::px(20.0),
            weight_method: WeightMethod::Linear,
            weight_min: FontWeight::Bold,
            weight_max: FontWeight::Light,
            ..Default::default()
        };

        let fields: Vec<String> = settings.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["baseSize", "linearMax", "weightMax"]);
    }

    #[test]
    fn test_validate_breakpoint_order() {
        let mut settings = TypographySettings::default();
        settings.responsive.mobile.max_width = Length::px(1200.0);
        settings.responsive.tablet.scale = 1.5;

        let issues = settings.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "responsive.tablet.scale");
        assert_eq!(issues[1].field, "responsive.mobile.maxWidth");

        settings.responsive.enabled = false;
        assert!(settings.is_valid());
    }

    #[test]
    fn test_custom_ramp_only_checked_when_selected() {
        let mut settings = TypographySettings::default();
        settings.custom_sizes[HeadingLevel::H3] = Length::px(-4.0);
        assert!(settings.is_valid());

        settings.scale_method = ScaleMethod::Custom;
        let issues = settings.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "customSizes.h3: must be greater than 0");
    }

    #[test]
    fn test_breakpoint_merges_over_its_default() {
        let settings: TypographySettings =
            serde_json::from_str(r#"{ "responsive": { "mobile": { "scale": 0.7 } } }"#).unwrap();
        assert_eq!(settings.responsive.mobile.scale, 0.7);
        assert_eq!(settings.responsive.mobile.max_width, Length::px(640.0));
        assert_eq!(settings.responsive.tablet, Responsive::default().tablet);
        assert!(settings.responsive.enabled);

        let settings: TypographySettings = serde_json::from_str(
            r#"{ "responsive": { "enabled": false, "tablet": { "maxWidth": "48rem" } } }"#,
        )
        .unwrap();
        assert!(!settings.responsive.enabled);
        assert_eq!(settings.responsive.tablet.max_width, Length::px(768.0));
        assert_eq!(settings.responsive.tablet.scale, 0.9);
    }

    #[test]
    fn test_font_slot_keeps_its_default_fallback() {
        let settings: TypographySettings = serde_json::from_str(
            r#"{ "fonts": { "code": { "family": "Fira Code" }, "heading": "Fraunces" } }"#,
        )
        .unwrap();
        assert_eq!(settings.fonts.code, FontStack::monospace("Fira Code"));
        assert_eq!(settings.fonts.heading, FontStack::sans("Fraunces"));
        assert_eq!(settings.fonts.body, Fonts::default().body);

        let settings: TypographySettings =
            serde_json::from_str(r#"{ "fonts": { "code": "'Fira Code', Menlo, monospace" } }"#).unwrap();
        assert_eq!(settings.fonts.code.fallback, "Menlo, monospace");
    }

    #[test]
    fn test_default_document_round_trips() {
        let settings = TypographySettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(serde_json::from_str::<TypographySettings>(&json).unwrap(), settings);
    }
}
