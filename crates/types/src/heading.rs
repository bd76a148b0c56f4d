//! Heading levels H1 through H6.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels, largest first.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Returns the heading number (1 for `<h1>`, 6 for `<h6>`).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Returns the zero-based position of this level in a ramp.
    pub fn index(self) -> usize {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
            HeadingLevel::H4 => 3,
            HeadingLevel::H5 => 4,
            HeadingLevel::H6 => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=6 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    /// The HTML tag name, also used as the key in exported maps.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HeadingLevel {
    type Err = String;

    /// Accepts `h3`, `H3` or a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('h')
            .or_else(|| trimmed.strip_prefix('H'))
            .unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| format!("Invalid heading level: '{}'", s))
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum HeadingLevelDef {
            Str(String),
            Num(u8),
        }

        match HeadingLevelDef::deserialize(deserializer)? {
            HeadingLevelDef::Str(s) => s.parse().map_err(de::Error::custom),
            HeadingLevelDef::Num(n) => Self::from_number(n)
                .ok_or_else(|| de::Error::custom(format!("Invalid heading level: {}", n))),
        }
    }
}
