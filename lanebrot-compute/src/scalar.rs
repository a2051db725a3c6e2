use lanebrot_core::{ConfigError, EscapeGrid, PixelMapping, RegionConfig, MAX_EXACT_ITERATIONS};

/// Iteration cap and squared escape radius, as the kernels consume them.
///
/// The cap never exceeds [`MAX_EXACT_ITERATIONS`], so lane counters stay exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeBounds {
    /// Whole-number iteration cap (exclusive loop bound).
    limit: u32,
    max_square_modulus: f32,
}

impl EscapeBounds {
    pub fn new(limit: u32, max_square_modulus: f32) -> Result<Self, ConfigError> {
        if !max_square_modulus.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "max_square_modulus",
                value: max_square_modulus,
            });
        }
        if limit > MAX_EXACT_ITERATIONS {
            return Err(ConfigError::IterationLimitTooLarge {
                limit: limit as f32,
                max: MAX_EXACT_ITERATIONS,
            });
        }
        Ok(Self {
            limit,
            max_square_modulus,
        })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn max_square_modulus(&self) -> f32 {
        self.max_square_modulus
    }
}

impl From<&RegionConfig> for EscapeBounds {
    fn from(config: &RegionConfig) -> Self {
        Self {
            limit: config.iteration_limit(),
            max_square_modulus: config.max_square_modulus(),
        }
    }
}

/// Escape time of a single point `c = cx + cy i`.
///
/// Iterates `z = z^2 + c` from `z = 0` while `iter < limit` and
/// `|z|^2 < max_square_modulus`. Returns `limit` for points that never escape.
#[inline]
pub fn escape_time(cx: f32, cy: f32, bounds: EscapeBounds) -> u32 {
    let mut zx = 0.0_f32;
    let mut zy = 0.0_f32;
    let mut iter = 0;

    while iter < bounds.limit && zx * zx + zy * zy < bounds.max_square_modulus {
        let next_zx = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = next_zx;
        iter += 1;
    }

    iter
}

/// Escape times for one row, starting at column `col_start`.
///
/// Fills all of `out`; `out[k]` is the pixel at column `col_start + k`.
pub fn compute_row_baseline(
    mapping: &PixelMapping,
    bounds: EscapeBounds,
    row: usize,
    col_start: usize,
    out: &mut [u32],
) {
    let cy = mapping.cy(row);
    for (k, count) in out.iter_mut().enumerate() {
        *count = escape_time(mapping.cx(col_start + k), cy, bounds);
    }
}

/// Reference kernel: one pixel at a time, row by row.
pub fn compute_baseline(config: &RegionConfig, grid: &mut EscapeGrid) {
    let mapping = PixelMapping::new(config, grid.rows(), grid.cols());
    let bounds = EscapeBounds::from(config);

    for (row, out) in grid.iter_rows_mut().enumerate() {
        compute_row_baseline(&mapping, bounds, row, 0, out);
    }
}
