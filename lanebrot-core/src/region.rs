// lanebrot-core/src/region.rs

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Number of values in an ordered parameter block:
/// `[x_min, x_max, y_min, y_max, max_iter, max_square_modulus]`.
pub const REGION_PARAM_COUNT: usize = 6;

/// Largest iteration limit whose counts stay exact in an `f32` lane (2^24).
pub const MAX_EXACT_ITERATIONS: u32 = 1 << 24;

/// Region of the complex plane plus the escape-time parameters.
///
/// All values are single precision. Both kernels read the same fields with the
/// same arithmetic, so their outputs agree pixel for pixel.
///
/// Bounds ordering (`x_min < x_max`, `y_min < y_max`) is the caller's concern.
/// Finiteness is checked on every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegionFields", into = "RegionFields")]
pub struct RegionConfig {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    /// Iteration cap, stored as given. Compared as `trunc(max_iter)`.
    max_iter: f32,
    /// Squared escape radius.
    max_square_modulus: f32,
}

/// Serialized shape of [`RegionConfig`]. Deserializing goes through
/// [`RegionConfig::new`] so loaded configs are validated too.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RegionFields {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    max_iter: f32,
    max_square_modulus: f32,
}

impl RegionConfig {
    /// Create a config from individual values.
    pub fn new(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        max_iter: f32,
        max_square_modulus: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            x_min,
            x_max,
            y_min,
            y_max,
            max_iter,
            max_square_modulus,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a config from an ordered parameter block
    /// `[x_min, x_max, y_min, y_max, max_iter, max_square_modulus]`.
    pub fn from_params(params: &[f32]) -> Result<Self, ConfigError> {
        match *params {
            [x_min, x_max, y_min, y_max, max_iter, max_square_modulus] => {
                Self::new(x_min, x_max, y_min, y_max, max_iter, max_square_modulus)
            }
            _ => Err(ConfigError::ParamCount {
                expected: REGION_PARAM_COUNT,
                actual: params.len(),
            }),
        }
    }

    /// Same limits, new bounds `[x_min, x_max, y_min, y_max]`.
    pub fn with_region(self, bounds: [f32; 4]) -> Result<Self, ConfigError> {
        let [x_min, x_max, y_min, y_max] = bounds;
        Self::new(
            x_min,
            x_max,
            y_min,
            y_max,
            self.max_iter,
            self.max_square_modulus,
        )
    }

    /// Same bounds, new iteration cap and squared escape radius.
    pub fn with_limits(self, max_iter: f32, max_square_modulus: f32) -> Result<Self, ConfigError> {
        Self::new(
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            max_iter,
            max_square_modulus,
        )
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The iteration cap exactly as configured (may be fractional).
    pub fn max_iter(&self) -> f32 {
        self.max_iter
    }

    /// Whole-number iteration bound used by the kernels.
    ///
    /// Fractional caps truncate toward zero; negative caps clamp to 0.
    pub fn iteration_limit(&self) -> u32 {
        // Float-to-int `as` saturates, so negatives land on 0.
        self.max_iter.trunc() as u32
    }

    pub fn max_square_modulus(&self) -> f32 {
        self.max_square_modulus
    }

    /// Bounds as `[x_min, x_max, y_min, y_max]`.
    pub fn bounds(&self) -> [f32; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }

    /// The ordered parameter block accepted by [`RegionConfig::from_params`].
    pub fn to_params(&self) -> [f32; REGION_PARAM_COUNT] {
        [
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            self.max_iter,
            self.max_square_modulus,
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
            ("max_iter", self.max_iter),
            ("max_square_modulus", self.max_square_modulus),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if self.max_iter.trunc() > MAX_EXACT_ITERATIONS as f32 {
            return Err(ConfigError::IterationLimitTooLarge {
                limit: self.max_iter,
                max: MAX_EXACT_ITERATIONS,
            });
        }

        Ok(())
    }
}

impl Default for RegionConfig {
    /// Whole set in view, 100 iterations, squared escape radius 100.
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
            max_iter: 100.0,
            max_square_modulus: 100.0,
        }
    }
}

impl TryFrom<RegionFields> for RegionConfig {
    type Error = ConfigError;

    fn try_from(f: RegionFields) -> Result<Self, Self::Error> {
        Self::new(
            f.x_min,
            f.x_max,
            f.y_min,
            f.y_max,
            f.max_iter,
            f.max_square_modulus,
        )
    }
}

impl From<RegionConfig> for RegionFields {
    fn from(c: RegionConfig) -> Self {
        Self {
            x_min: c.x_min,
            x_max: c.x_max,
            y_min: c.y_min,
            y_max: c.y_max,
            max_iter: c.max_iter,
            max_square_modulus: c.max_square_modulus,
        }
    }
}
