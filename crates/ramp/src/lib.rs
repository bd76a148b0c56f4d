//! Heading ramp calculations.
//!
//! Given a [`TypographySettings`] record this crate produces the six heading
//! sizes, the six heading weights and the per-breakpoint size overrides.
//! Every function is pure and infallible; range checking is the caller's job
//! (see [`TypographySettings::validate`]).

pub mod responsive;
pub mod sizes;
pub mod weights;

pub use responsive::{responsive_ramps, scale_ramp, ResponsiveRamp};
pub use sizes::{size_ramp, SIZE_TABLE};
pub use weights::weight_ramp;

use serde::Serialize;
use typeramp_style::TypographySettings;
use typeramp_types::{HeadingLevel, Ramp};

/// Everything the exporters need besides the settings themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRamps {
    pub base_size: f32,
    pub sizes: Ramp<f32>,
    pub weights: Ramp<u16>,
    pub responsive: Vec<ResponsiveRamp>,
}

impl ComputedRamps {
    pub fn size(&self, level: HeadingLevel) -> f32 {
        self.sizes[level]
    }

    pub fn weight(&self, level: HeadingLevel) -> u16 {
        self.weights[level]
    }
}

pub fn calculate(settings: &TypographySettings) -> ComputedRamps {
    let sizes = size_ramp(settings);
    let weights = weight_ramp(settings);
    let responsive = responsive_ramps(settings, &sizes);
    log::debug!(
        "Computed {} ramp {:?} with {} weights {:?}",
        settings.scale_method,
        sizes.values(),
        settings.weight_method,
        weights.values()
    );

    ComputedRamps {
        base_size: settings.base_size.to_px(),
        sizes,
        weights,
        responsive,
    }
}
