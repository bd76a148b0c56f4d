//! Ramp formulas and the ratios they are parameterised by.

use crate::parsers::{parse_ratio, run_parser, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named musical-interval ratios, smallest first.
pub const RATIO_PRESETS: [(&str, f32); 8] = [
    ("minor-second", 1.067),
    ("major-second", 1.125),
    ("minor-third", 1.2),
    ("major-third", 1.25),
    ("perfect-fourth", 1.333),
    ("augmented-fourth", 1.414),
    ("perfect-fifth", 1.5),
    ("golden", 1.618),
];

/// Multiplier applied to a modular scale step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleRatio(f32);

impl Default for ScaleRatio {
    fn default() -> Self {
        ScaleRatio(1.25)
    }
}

impl ScaleRatio {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Looks up a named preset (`"major-third"`, `"golden"`, ...).
    pub fn preset(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");
        let normalized = match normalized.as_str() {
            "golden-ratio" | "golden-section" => "golden",
            "tritone" => "augmented-fourth",
            other => other,
        };
        RATIO_PRESETS
            .iter()
            .find(|(preset, _)| *preset == normalized)
            .map(|(_, value)| ScaleRatio(*value))
    }

    /// Returns the preset name when this ratio is exactly one of the presets.
    pub fn preset_name(self) -> Option<&'static str> {
        RATIO_PRESETS
            .iter()
            .find(|(_, value)| *value == self.0)
            .map(|(name, _)| *name)
    }

    /// Parse a ratio from a decimal, a preset name or `a:b` notation.
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_ratio, s).map(ScaleRatio)
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preset_name() {
            Some(name) => write!(f, "{} ({})", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for ScaleRatio {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ScaleRatio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.preset_name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_f32(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ScaleRatio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ScaleRatioDef {
            Num(f32),
            Str(String),
        }

        match ScaleRatioDef::deserialize(deserializer)? {
            ScaleRatioDef::Num(n) => Ok(ScaleRatio(n)),
            ScaleRatioDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
        }
    }
}

/// How the six heading sizes are derived from the settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleMethod {
    /// `base × ratio^(5 − n)`: H5 sits on the base size.
    #[default]
    #[serde(alias = "geometric")]
    Modular,
    /// Straight interpolation from `linearMax` (H1) down to `linearMin` (H6).
    Linear,
    /// Fixed per-level multipliers of the base size.
    Table,
    /// Six sizes given directly.
    Custom,
}

impl FromStr for ScaleMethod {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modular" | "geometric" => Ok(ScaleMethod::Modular),
            "linear" => Ok(ScaleMethod::Linear),
            "table" | "fixed" => Ok(ScaleMethod::Table),
            "custom" => Ok(ScaleMethod::Custom),
            _ => Err(StyleParseError::InvalidValue {
                property: "scale-method".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleMethod::Modular => "modular",
            ScaleMethod::Linear => "linear",
            ScaleMethod::Table => "table",
            ScaleMethod::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// How the six heading weights are derived from the settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeightMethod {
    #[default]
    Uniform,
    Linear,
    Custom,
}

impl FromStr for WeightMethod {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "fixed" => Ok(WeightMethod::Uniform),
            "linear" => Ok(WeightMethod::Linear),
            "custom" => Ok(WeightMethod::Custom),
            _ => Err(StyleParseError::InvalidValue {
                property: "weight-method".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeightMethod::Uniform => "uniform",
            WeightMethod::Linear => "linear",
            WeightMethod::Custom => "custom",
        };
        f.write_str(name)
    }
}
