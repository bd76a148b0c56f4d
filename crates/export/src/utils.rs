//! Number and description formatting shared by the generators.

use typeramp_style::{ScaleMethod, TypographySettings, WeightMethod};

/// Formats a number with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f32) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn px(value: f32) -> String {
    format!("{}px", fmt_num(value))
}

/// An `em` length; zero is written unitless.
pub fn em(value: f32) -> String {
    let num = fmt_num(value);
    if num == "0" { num } else { format!("{}em", num) }
}

/// A one-line summary of the formulas behind an export, used in header comments.
pub fn describe(settings: &TypographySettings) -> String {
    let sizes = match settings.scale_method {
        ScaleMethod::Modular => format!(
            "modular scale, ratio {}, base {}",
            settings.scale_ratio,
            px(settings.base_size.to_px())
        ),
        ScaleMethod::Linear => format!(
            "linear scale from {} to {}",
            px(settings.linear_max.to_px()),
            px(settings.linear_min.to_px())
        ),
        ScaleMethod::Table => format!("table scale, base {}", px(settings.base_size.to_px())),
        ScaleMethod::Custom => "custom sizes".to_string(),
    };
    let weights = match settings.weight_method {
        WeightMethod::Uniform => format!("uniform weight {}", settings.heading_weight),
        WeightMethod::Linear => format!(
            "linear weights from {} to {}",
            settings.weight_max, settings.weight_min
        ),
        WeightMethod::Custom => "custom weights".to_string(),
    };
    format!("{}; {}", sizes, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(16.0), "16");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(1.2), "1.2");
        assert_eq!(fmt_num(0.875), "0.875");
        assert_eq!(fmt_num(-0.01), "-0.01");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(13.333_333), "13.333");
    }

    #[test]
    fn test_units() {
        assert_eq!(px(39.0), "39px");
        assert_eq!(em(0.0), "0");
        assert_eq!(em(1.5), "1.5em");
    }

    #[test]
    fn test_describe_defaults() {
        let text = describe(&TypographySettings::default());
        assert_eq!(
            text,
            "modular scale, ratio 1.25 (major-third), base 16px; uniform weight 700"
        );
    }
}
