use crate::RegionConfig;

/// Pixel to complex-plane mapping for one grid shape.
///
/// Pixel `(row, col)` maps to `c = (x_min + col * x_step) + (y_min + row * y_step)i`
/// where the steps divide the region width/height by the column/row count.
/// Built fresh for every kernel call since both the region and the grid shape
/// may change between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMapping {
    pub x_min: f32,
    pub y_min: f32,
    pub x_step: f32,
    pub y_step: f32,
}

impl PixelMapping {
    pub fn new(config: &RegionConfig, rows: usize, cols: usize) -> Self {
        let [x_min, x_max, y_min, y_max] = config.bounds();
        Self {
            x_min,
            y_min,
            x_step: (x_max - x_min) / cols as f32,
            y_step: (y_max - y_min) / rows as f32,
        }
    }

    /// Real part of `c` for a column.
    #[inline]
    pub fn cx(&self, col: usize) -> f32 {
        self.x_min + col as f32 * self.x_step
    }

    /// Imaginary part of `c` for a row.
    #[inline]
    pub fn cy(&self, row: usize) -> f32 {
        self.y_min + row as f32 * self.y_step
    }

    #[inline]
    pub fn point(&self, row: usize, col: usize) -> (f32, f32) {
        (self.cx(col), self.cy(row))
    }
}
