//! Lane-group escape-time kernel.
//!
//! Each row is cut into groups of `V::WIDTH` adjacent pixels that iterate
//! together. A per-lane active mask gates every state update, so a lane that
//! has escaped (or hit the cap) keeps its `z` and its count frozen while the
//! rest of the group carries on. Columns left over after the last full group
//! go through the scalar kernel.

use crate::lanes::EscapeLanes;
use crate::scalar::{compute_row_baseline, EscapeBounds};
use lanebrot_core::{EscapeGrid, PixelMapping, RegionConfig};
use wide::f32x8;

/// Lane vector used by [`compute_vectorized`].
pub type DefaultLanes = f32x8;

/// Vectorized kernel at the default lane width.
///
/// Produces exactly the counts of [`crate::compute_baseline`].
pub fn compute_vectorized(config: &RegionConfig, grid: &mut EscapeGrid) {
    compute_vectorized_with::<DefaultLanes>(config, grid);
}

/// Vectorized kernel at the lane width of `V`.
pub fn compute_vectorized_with<V: EscapeLanes>(config: &RegionConfig, grid: &mut EscapeGrid) {
    let mapping = PixelMapping::new(config, grid.rows(), grid.cols());
    let bounds = EscapeBounds::from(config);

    for (row, out) in grid.iter_rows_mut().enumerate() {
        compute_row_vectorized::<V>(&mapping, bounds, row, out);
    }
}

/// One full row: lane groups first, then the scalar tail.
pub fn compute_row_vectorized<V: EscapeLanes>(
    mapping: &PixelMapping,
    bounds: EscapeBounds,
    row: usize,
    out: &mut [u32],
) {
    let cy = V::splat(mapping.cy(row));

    let mut groups = out.chunks_exact_mut(V::WIDTH);
    let mut col = 0;
    for group in groups.by_ref() {
        let cx = V::from_fn(|k| mapping.cx(col + k));
        escape_group(cx, cy, bounds).store_counts(group);
        col += V::WIDTH;
    }

    let tail = groups.into_remainder();
    if !tail.is_empty() {
        compute_row_baseline(mapping, bounds, row, col, tail);
    }
}

/// Escape times for one lane group. Lane values are whole-number counts.
#[inline]
pub fn escape_group<V: EscapeLanes>(cx: V, cy: V, bounds: EscapeBounds) -> V {
    let zero = V::splat(0.0);
    let one = V::splat(1.0);
    let two = V::splat(2.0);
    let limit = V::splat(bounds.limit() as f32);
    let max_square_modulus = V::splat(bounds.max_square_modulus());

    let mut zx = zero;
    let mut zy = zero;
    let mut iter = zero;

    for _ in 0..bounds.limit() {
        let active =
            (zx * zx + zy * zy).less_than(max_square_modulus) & iter.less_than(limit);
        if active.is_clear() {
            break;
        }

        // Same operation order as the scalar kernel.
        let next_zx = zx * zx - zy * zy + cx;
        let next_zy = two * zx * zy + cy;

        zx = V::select(active, next_zx, zx);
        zy = V::select(active, next_zy, zy);
        iter = iter + V::select(active, one, zero);
    }

    iter
}
