pub mod dimension;
pub mod font;
pub mod parsers;
pub mod scale;
pub mod settings;

pub use dimension::Length;
pub use font::{FontStack, FontWeight, PartialFontStack};
pub use parsers::StyleParseError;
pub use scale::{ScaleMethod, ScaleRatio, WeightMethod, RATIO_PRESETS};
pub use settings::{Breakpoint, Fonts, Responsive, SettingsIssue, Spacing, TypographySettings};
