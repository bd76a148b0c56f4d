//! Defines the pixel length used for sizes and breakpoints.
use crate::parsers::{parse_length, run_parser, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::hash::{Hash, Hasher};

/// Pixels per `rem` (and per `em` when there is no other context).
pub const REM_PX: f32 = 16.0;
/// Pixels per typographic point.
pub const PT_PX: f32 = 4.0 / 3.0;

/// A CSS length normalised to pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f32);

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Eq for Length {}

impl Length {
    pub const fn px(value: f32) -> Self {
        Self(value)
    }

    pub fn rem(value: f32) -> Self {
        Self(value * REM_PX)
    }

    pub fn to_px(self) -> f32 {
        self.0
    }

    pub fn to_rem(self) -> f32 {
        self.0 / REM_PX
    }

    /// Parse a CSS-style length (e.g., "16px", "1.125rem", "12pt", "18")
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_length, s).map(Length)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl FromStr for Length {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Num(f32),
            Str(String),
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Num(n) => Ok(Length(n)),
            LengthDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_normalise_to_px() {
        assert_eq!(Length::parse("16px").unwrap().to_px(), 16.0);
        assert_eq!(Length::parse("1.5rem").unwrap().to_px(), 24.0);
        assert_eq!(Length::parse("2em").unwrap().to_px(), 32.0);
        assert!((Length::parse("12pt").unwrap().to_px() - 16.0).abs() < 1e-4);
        assert_eq!(Length::parse(" 18 ").unwrap().to_px(), 18.0);
        assert!(Length::parse("18vw").is_err());
        assert!(Length::parse("px").is_err());
    }

    #[test]
    fn test_serde() {
        let len: Length = serde_json::from_str("20").unwrap();
        assert_eq!(len, Length::px(20.0));
        let len: Length = serde_json::from_str("\"1rem\"").unwrap();
        assert_eq!(len, Length::px(16.0));
        assert_eq!(serde_json::to_string(&Length::px(14.0)).unwrap(), "\"14px\"");
        assert_eq!(Length::px(24.0).to_rem(), 1.5);
    }
}
