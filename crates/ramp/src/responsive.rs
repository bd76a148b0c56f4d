//! Breakpoint overrides of the size ramp.

use serde::Serialize;
use typeramp_style::{Breakpoint, TypographySettings};
use typeramp_types::Ramp;

/// The base size and heading sizes in effect below one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveRamp {
    pub name: &'static str,
    pub max_width: f32,
    pub scale: f32,
    pub base_size: f32,
    pub sizes: Ramp<f32>,
}

/// Multiplies the base size and every heading size by the breakpoint scale,
/// rounding to whole pixels.
pub fn scale_ramp(
    name: &'static str,
    breakpoint: Breakpoint,
    base_size: f32,
    sizes: &Ramp<f32>,
) -> ResponsiveRamp {
    let scale = breakpoint.scale;
    ResponsiveRamp {
        name,
        max_width: breakpoint.max_width.to_px(),
        scale,
        base_size: (base_size * scale).round(),
        sizes: sizes.map(|size| (size * scale).round()),
    }
}

/// One ramp per enabled breakpoint, widest first.
pub fn responsive_ramps(settings: &TypographySettings, sizes: &Ramp<f32>) -> Vec<ResponsiveRamp> {
    let base_size = settings.base_size.to_px();
    settings
        .responsive
        .active_breakpoints()
        .into_iter()
        .map(|(name, breakpoint)| scale_ramp(name, breakpoint, base_size, sizes))
        .collect()
}
