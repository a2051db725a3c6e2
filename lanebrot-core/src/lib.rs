pub mod error;
pub mod grid;
pub mod mapping;
pub mod presets;
pub mod region;

pub use error::{ConfigError, GridError};
pub use grid::EscapeGrid;
pub use mapping::PixelMapping;
pub use presets::{
    get_region_preset, RegionPreset, CANONICAL_REGION, ELEPHANT_VALLEY, REGION_PRESETS,
    SEAHORSE_VALLEY,
};
pub use region::{RegionConfig, MAX_EXACT_ITERATIONS, REGION_PARAM_COUNT};
