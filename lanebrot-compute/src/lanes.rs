//! Lane vectors for the vectorized escape-time kernel.
//!
//! Abstracts the handful of SIMD operations the kernel needs so one generic
//! implementation runs at 4 or 8 lanes. Masks use the float-vector encoding
//! from `wide`: a set lane is all ones, a clear lane is all zeros.

use std::ops::{Add, BitAnd, Mul, Sub};
use wide::{f32x4, f32x8, CmpLt};

/// A vector of `WIDTH` single-precision lanes.
///
/// Arithmetic is lane-wise IEEE single precision without fused multiply-add,
/// which keeps every lane bit-identical to the scalar kernel.
pub trait EscapeLanes:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + BitAnd<Output = Self>
{
    /// Number of lanes (pixels per group).
    const WIDTH: usize;

    /// All lanes set to `value`.
    fn splat(value: f32) -> Self;

    /// Lane `k` set to `f(k)`.
    fn from_fn(f: impl FnMut(usize) -> f32) -> Self;

    /// Lane mask of `self < rhs`. NaN lanes compare false.
    fn less_than(self, rhs: Self) -> Self;

    /// Per lane: `if_true` where `mask` is set, `if_false` elsewhere.
    fn select(mask: Self, if_true: Self, if_false: Self) -> Self;

    /// True when no lane of the mask is set.
    fn is_clear(self) -> bool;

    /// Write whole-number lane values into `out` (length `WIDTH`).
    fn store_counts(self, out: &mut [u32]);
}

macro_rules! impl_escape_lanes {
    ($ty:ident, $width:literal) => {
        impl EscapeLanes for $ty {
            const WIDTH: usize = $width;

            #[inline]
            fn splat(value: f32) -> Self {
                $ty::splat(value)
            }

            #[inline]
            fn from_fn(f: impl FnMut(usize) -> f32) -> Self {
                $ty::new(std::array::from_fn(f))
            }

            #[inline]
            fn less_than(self, rhs: Self) -> Self {
                self.cmp_lt(rhs)
            }

            #[inline]
            fn select(mask: Self, if_true: Self, if_false: Self) -> Self {
                mask.blend(if_true, if_false)
            }

            #[inline]
            fn is_clear(self) -> bool {
                self.none()
            }

            #[inline]
            fn store_counts(self, out: &mut [u32]) {
                debug_assert_eq!(out.len(), Self::WIDTH);
                for (dst, lane) in out.iter_mut().zip(self.to_array()) {
                    *dst = lane as u32;
                }
            }
        }
    };
}

impl_escape_lanes!(f32x4, 4);
impl_escape_lanes!(f32x8, 8);

#[cfg(test)]
mod tests {
    use super::*;

    fn counts<V: EscapeLanes>(v: V) -> Vec<u32> {
        let mut out = vec![0; V::WIDTH];
        v.store_counts(&mut out);
        out
    }

    #[test]
    fn from_fn_fills_lanes_in_order() {
        let v = <f32x8 as EscapeLanes>::from_fn(|k| k as f32 * 2.0);
        assert_eq!(counts(v), vec![0, 2, 4, 6, 8, 10, 12, 14]);
    }

    #[test]
    fn select_follows_mask() {
        let v = <f32x4 as EscapeLanes>::from_fn(|k| k as f32);
        let mask = v.less_than(<f32x4 as EscapeLanes>::splat(2.0));
        let picked = <f32x4 as EscapeLanes>::select(
            mask,
            <f32x4 as EscapeLanes>::splat(9.0),
            <f32x4 as EscapeLanes>::splat(1.0),
        );
        assert_eq!(counts(picked), vec![9, 9, 1, 1]);
    }

    #[test]
    fn nan_lanes_compare_false() {
        let v = <f32x4 as EscapeLanes>::from_fn(|k| if k == 1 { f32::NAN } else { 0.0 });
        let mask = v.less_than(<f32x4 as EscapeLanes>::splat(1.0));
        let ones = <f32x4 as EscapeLanes>::select(
            mask,
            <f32x4 as EscapeLanes>::splat(1.0),
            <f32x4 as EscapeLanes>::splat(0.0),
        );
        assert_eq!(counts(ones), vec![1, 0, 1, 1]);
    }

    #[test]
    fn widths_match_lane_arrays() {
        assert_eq!(<f32x4 as EscapeLanes>::WIDTH, f32x4::ZERO.to_array().len());
        assert_eq!(<f32x8 as EscapeLanes>::WIDTH, f32x8::ZERO.to_array().len());
    }

    #[test]
    fn both_widths_store_the_same_counts() {
        let four = <f32x4 as EscapeLanes>::from_fn(|k| (k * 3) as f32);
        let eight = <f32x8 as EscapeLanes>::from_fn(|k| (k * 3) as f32);
        assert_eq!(counts(four), &counts(eight)[..4]);
    }

    #[test]
    fn mask_and_clear() {
        let zero = <f32x8 as EscapeLanes>::splat(0.0);
        let one = <f32x8 as EscapeLanes>::splat(1.0);

        assert!(one.less_than(zero).is_clear());
        assert!(!zero.less_than(one).is_clear());
        assert!((zero.less_than(one) & one.less_than(zero)).is_clear());
    }
}
