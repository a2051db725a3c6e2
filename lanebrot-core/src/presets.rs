//! Named regions.
//!
//! Static table of well-known views, looked up by id. Each preset stores an
//! ordered parameter block and is validated when turned into a
//! [`RegionConfig`].

use crate::error::ConfigError;
use crate::region::REGION_PARAM_COUNT;
use crate::RegionConfig;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegionPreset {
    /// Lookup key
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// `[x_min, x_max, y_min, y_max, max_iter, max_square_modulus]`
    pub params: [f32; REGION_PARAM_COUNT],
}

impl RegionPreset {
    pub fn region(&self) -> Result<RegionConfig, ConfigError> {
        RegionConfig::from_params(&self.params)
    }
}

/// The whole set, symmetric about the real axis.
pub static CANONICAL_REGION: RegionPreset = RegionPreset {
    id: "canonical",
    display_name: "Mandelbrot Set",
    params: [-2.0, 1.0, -1.5, 1.5, 100.0, 4.0],
};

/// Between the main cardioid and the period-2 bulb.
pub static SEAHORSE_VALLEY: RegionPreset = RegionPreset {
    id: "seahorse",
    display_name: "Seahorse Valley",
    params: [-0.8, -0.7, 0.05, 0.15, 500.0, 4.0],
};

/// Cusp side of the main cardioid.
pub static ELEPHANT_VALLEY: RegionPreset = RegionPreset {
    id: "elephant",
    display_name: "Elephant Valley",
    params: [0.25, 0.35, -0.05, 0.05, 500.0, 4.0],
};

pub static REGION_PRESETS: &[&RegionPreset] =
    &[&CANONICAL_REGION, &SEAHORSE_VALLEY, &ELEPHANT_VALLEY];

/// Look up a preset by id.
pub fn get_region_preset(id: &str) -> Option<&'static RegionPreset> {
    REGION_PRESETS.iter().copied().find(|p| p.id == id)
}
