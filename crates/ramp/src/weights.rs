//! Font-weight ramps.

use crate::sizes::ramp_position;
use typeramp_style::{FontWeight, TypographySettings, WeightMethod};
use typeramp_types::Ramp;

pub const MIN_SNAPPED_WEIGHT: u16 = 100;
pub const MAX_SNAPPED_WEIGHT: u16 = 900;

/// Rounds to the nearest hundred and clamps to the 100..=900 keyword range.
pub fn snap_weight(weight: f32) -> u16 {
    let snapped = (weight / 100.0).round() * 100.0;
    snapped.clamp(f32::from(MIN_SNAPPED_WEIGHT), f32::from(MAX_SNAPPED_WEIGHT)) as u16
}

pub fn uniform_weights(weight: FontWeight) -> Ramp<u16> {
    Ramp::from_fn(|_| weight.numeric_value())
}

/// Interpolates from `max` at H1 down to `min` at H6, snapped to hundreds.
pub fn linear_weights(min: FontWeight, max: FontWeight) -> Ramp<u16> {
    let (min, max) = (f32::from(min.numeric_value()), f32::from(max.numeric_value()));
    Ramp::from_fn(|level| snap_weight(max - (max - min) * ramp_position(level)))
}

pub fn custom_weights(weights: &Ramp<FontWeight>) -> Ramp<u16> {
    weights.map(FontWeight::numeric_value)
}

/// Computes the heading weights for the method selected in `settings`.
pub fn weight_ramp(settings: &TypographySettings) -> Ramp<u16> {
    match settings.weight_method {
        WeightMethod::Uniform => uniform_weights(settings.heading_weight),
        WeightMethod::Linear => linear_weights(settings.weight_min, settings.weight_max),
        WeightMethod::Custom => custom_weights(&settings.custom_weights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeramp_types::HeadingLevel;

    #[test]
    fn test_snap_weight() {
        assert_eq!(snap_weight(740.0), 700);
        assert_eq!(snap_weight(760.0), 800);
        assert_eq!(snap_weight(20.0), 100);
        assert_eq!(snap_weight(990.0), 900);
    }

    #[test]
    fn test_linear_weights() {
        let weights = linear_weights(FontWeight::Medium, FontWeight::ExtraBold);
        assert_eq!(weights.values(), &[800, 700, 700, 600, 600, 500]);

        let weights = linear_weights(FontWeight::Numeric(300), FontWeight::Numeric(900));
        assert!(weights.values().iter().all(|w| w % 100 == 0 && (100..=900).contains(w)));
        assert_eq!(weights[HeadingLevel::H1], 900);
        assert_eq!(weights[HeadingLevel::H6], 300);
    }

    #[test]
    fn test_weight_ramp_dispatches_on_method() {
        let mut settings = TypographySettings::default();
        assert_eq!(weight_ramp(&settings).values(), &[700; 6]);

        settings.weight_method = WeightMethod::Custom;
        settings.custom_weights[HeadingLevel::H6] = FontWeight::Numeric(550);
        let weights = weight_ramp(&settings);
        assert_eq!(weights[HeadingLevel::H1], 800);
        assert_eq!(weights[HeadingLevel::H6], 550);
    }
}
