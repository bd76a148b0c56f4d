//! Font-size ramps.
//!
//! Every formula returns whole pixels: results are rounded with `f32::round`.

use typeramp_style::{Length, ScaleMethod, TypographySettings};
use typeramp_types::{HeadingLevel, Ramp};

/// Per-level multipliers of the base size used by [`ScaleMethod::Table`]
/// (the browser default heading sizes).
pub const SIZE_TABLE: [f32; 6] = [2.0, 1.5, 1.17, 1.0, 0.83, 0.67];

/// Position of `level` between H1 (0.0) and H6 (1.0).
pub(crate) fn ramp_position(level: HeadingLevel) -> f32 {
    f32::from(level.number() - 1) / 5.0
}

/// `base × ratio^(5 − n)`: H5 equals the base size, H6 is one step below it.
pub fn modular_sizes(base: f32, ratio: f32) -> Ramp<f32> {
    Ramp::from_fn(|level| {
        let exponent = 5 - i32::from(level.number());
        (base * ratio.powi(exponent)).round()
    })
}

/// Interpolates from `max` at H1 down to `min` at H6.
pub fn linear_sizes(min: f32, max: f32) -> Ramp<f32> {
    Ramp::from_fn(|level| (max - (max - min) * ramp_position(level)).round())
}

pub fn table_sizes(base: f32) -> Ramp<f32> {
    Ramp::from_fn(|level| (base * SIZE_TABLE[level.index()]).round())
}

pub fn custom_sizes(sizes: &Ramp<Length>) -> Ramp<f32> {
    sizes.map(|size| size.to_px().round())
}

/// Computes the heading sizes for the method selected in `settings`.
pub fn size_ramp(settings: &TypographySettings) -> Ramp<f32> {
    let base = settings.base_size.to_px();
    match settings.scale_method {
        ScaleMethod::Modular => modular_sizes(base, settings.scale_ratio.value()),
        ScaleMethod::Linear => {
            linear_sizes(settings.linear_min.to_px(), settings.linear_max.to_px())
        }
        ScaleMethod::Table => table_sizes(base),
        ScaleMethod::Custom => custom_sizes(&settings.custom_sizes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeramp_style::ScaleRatio;

    #[test]
    fn test_modular_minor_third() {
        let sizes = modular_sizes(16.0, 1.2);
        assert_eq!(sizes[HeadingLevel::H4], (16.0_f32 * 1.2).round());
        assert_eq!(sizes.values(), &[33.0, 28.0, 23.0, 19.0, 16.0, 13.0]);
    }

    #[test]
    fn test_modular_h5_is_base() {
        for ratio in [1.067, 1.25, 1.5, 1.618] {
            for base in [12.0, 16.0, 18.0, 21.0] {
                assert_eq!(modular_sizes(base, ratio)[HeadingLevel::H5], base);
            }
        }
    }

    #[test]
    fn test_linear_endpoints_and_order() {
        let sizes = linear_sizes(16.0, 40.0);
        assert_eq!(sizes.values(), &[40.0, 35.0, 30.0, 26.0, 21.0, 16.0]);
        assert!(sizes.values().windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_table() {
        let sizes = table_sizes(16.0);
        assert_eq!(sizes.values(), &[32.0, 24.0, 19.0, 16.0, 13.0, 11.0]);
    }

    #[test]
    fn test_size_ramp_dispatches_on_method() {
        let mut settings = TypographySettings {
            scale_ratio: ScaleRatio::new(1.2),
            ..Default::default()
        };
        assert_eq!(size_ramp(&settings)[HeadingLevel::H4], 19.0);

        settings.scale_method = ScaleMethod::Custom;
        settings.custom_sizes[HeadingLevel::H1] = Length::px(47.6);
        let sizes = size_ramp(&settings);
        assert_eq!(sizes[HeadingLevel::H1], 48.0);
        assert_eq!(sizes[HeadingLevel::H6], 16.0);

        settings.scale_method = ScaleMethod::Table;
        settings.base_size = Length::px(20.0);
        assert_eq!(size_ramp(&settings)[HeadingLevel::H1], 40.0);
    }
}
