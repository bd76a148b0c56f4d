use crate::parsers::{parse_font_stack, run_parser, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Keywords compare equal to their numeric value (`Bold == Numeric(700)`).
#[derive(Debug, Clone, Copy, Default)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale for the keywords).
    ///
    /// Standard CSS font-weight values:
    /// - Thin: 100
    /// - ExtraLight: 200
    /// - Light: 300
    /// - Regular: 400
    /// - Medium: 500
    /// - SemiBold: 600
    /// - Bold: 700
    /// - ExtraBold: 800
    /// - Black: 900
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Parse a font weight from a string (e.g., "bold", "semi-bold", "600")
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "thin" | "hairline" => Ok(FontWeight::Thin),
            "extralight" | "ultralight" => Ok(FontWeight::ExtraLight),
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "semibold" | "demibold" => Ok(FontWeight::SemiBold),
            "bold" => Ok(FontWeight::Bold),
            "extrabold" | "ultrabold" => Ok(FontWeight::ExtraBold),
            "black" | "heavy" => Ok(FontWeight::Black),
            _ => normalized
                .parse::<u16>()
                .map(FontWeight::Numeric)
                .map_err(|_| StyleParseError::InvalidValue {
                    property: "font-weight".to_string(),
                    value: s.to_string(),
                }),
        }
    }
}

impl PartialEq for FontWeight {
    fn eq(&self, other: &Self) -> bool {
        self.numeric_value() == other.numeric_value()
    }
}

impl Eq for FontWeight {}

impl Hash for FontWeight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric_value().hash(state);
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeric_value())
    }
}

impl From<u16> for FontWeight {
    fn from(n: u16) -> Self {
        FontWeight::Numeric(n)
    }
}

impl FromStr for FontWeight {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FontWeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.numeric_value())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::Numeric(n)),
        }
    }
}

/// A primary family with the fallback list that follows it in `font-family`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontStack {
    pub family: String,
    pub fallback: String,
}

impl FontStack {
    pub fn new(family: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            fallback: fallback.into(),
        }
    }

    pub fn sans(family: impl Into<String>) -> Self {
        Self::new(family, "sans-serif")
    }

    pub fn monospace(family: impl Into<String>) -> Self {
        Self::new(family, "monospace")
    }

    /// The primary family as it must appear in CSS: quoted when it is not a
    /// single identifier.
    pub fn css_family(&self) -> String {
        let is_ident = !self.family.is_empty()
            && self
                .family
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            && !self.family.starts_with(|c: char| c.is_ascii_digit());
        if is_ident {
            self.family.clone()
        } else {
            format!("\"{}\"", self.family.replace('"', "\\\""))
        }
    }

    /// The fallback entries, split on commas.
    pub fn fallbacks(&self) -> Vec<&str> {
        self.fallback
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        Ok(PartialFontStack::parse(s)?.or_fallback(DEFAULT_FALLBACK))
    }
}

impl fmt::Display for FontStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fallback.trim().is_empty() {
            write!(f, "{}", self.css_family())
        } else {
            write!(f, "{}, {}", self.css_family(), self.fallback.trim())
        }
    }
}

impl FromStr for FontStack {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FontStack {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FontStack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(PartialFontStack::deserialize(deserializer)?.or_fallback(DEFAULT_FALLBACK))
    }
}

const DEFAULT_FALLBACK: &str = "sans-serif";

/// A font stack as written in a settings document, where the fallback list
/// may be left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialFontStack {
    pub family: String,
    pub fallback: Option<String>,
}

impl PartialFontStack {
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_font_stack, s)
    }

    /// Completes the stack, using `fallback` when none was written.
    pub fn or_fallback(self, fallback: &str) -> FontStack {
        FontStack {
            family: self.family,
            fallback: self.fallback.unwrap_or_else(|| fallback.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PartialFontStack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Map {
                family: String,
                #[serde(default)]
                fallback: Option<String>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            Repr::Map { family, fallback } => Ok(PartialFontStack { family, fallback }),
        }
    }
}
