use crate::lanes::EscapeLanes;
use crate::scalar::compute_baseline;
use crate::vector::compute_vectorized_with;
use lanebrot_core::{EscapeGrid, RegionConfig};
use std::marker::PhantomData;
use std::time::Instant;
use wide::{f32x4, f32x8};

/// An escape-time kernel that can be picked at runtime.
///
/// Every implementation fills the whole grid and produces the same counts as
/// the baseline; they differ only in how many pixels advance per step.
pub trait EscapeKernel: dyn_clone::DynClone + Send + Sync {
    /// Registry id (see [`KERNEL_IDS`])
    fn id(&self) -> &'static str;

    /// Pixels processed per step. 1 for the scalar baseline.
    fn lane_width(&self) -> usize;

    fn compute(&self, config: &RegionConfig, grid: &mut EscapeGrid);
}

dyn_clone::clone_trait_object!(EscapeKernel);

/// Scalar reference kernel.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineKernel;

impl EscapeKernel for BaselineKernel {
    fn id(&self) -> &'static str {
        "baseline"
    }

    fn lane_width(&self) -> usize {
        1
    }

    fn compute(&self, config: &RegionConfig, grid: &mut EscapeGrid) {
        compute_baseline(config, grid);
    }
}

/// Vectorized kernel at the lane width of `V`.
pub struct LaneKernel<V> {
    id: &'static str,
    _lanes: PhantomData<fn() -> V>,
}

impl<V: EscapeLanes> LaneKernel<V> {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            _lanes: PhantomData,
        }
    }
}

// Derive would add a `V: Clone` bound.
impl<V> Clone for LaneKernel<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            _lanes: PhantomData,
        }
    }
}

impl<V: EscapeLanes + 'static> EscapeKernel for LaneKernel<V> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn lane_width(&self) -> usize {
        V::WIDTH
    }

    fn compute(&self, config: &RegionConfig, grid: &mut EscapeGrid) {
        compute_vectorized_with::<V>(config, grid);
    }
}

/// Ids accepted by [`create_kernel`]. `"vectorized"` is the default lane width.
pub const KERNEL_IDS: &[&str] = &["baseline", "lanes4", "lanes8", "vectorized"];

/// Create a kernel by id.
pub fn create_kernel(kernel_id: &str) -> Option<Box<dyn EscapeKernel>> {
    match kernel_id {
        "baseline" => Some(Box::new(BaselineKernel)),
        "lanes4" => Some(Box::new(LaneKernel::<f32x4>::new("lanes4"))),
        "lanes8" => Some(Box::new(LaneKernel::<f32x8>::new("lanes8"))),
        "vectorized" => Some(Box::new(LaneKernel::<f32x8>::new("vectorized"))),
        _ => {
            log::warn!("Unknown escape kernel id: {kernel_id}");
            None
        }
    }
}

/// Run a kernel and log how long it took.
pub fn run_kernel(kernel: &dyn EscapeKernel, config: &RegionConfig, grid: &mut EscapeGrid) {
    let start = Instant::now();
    kernel.compute(config, grid);
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;

    log::debug!(
        "{} kernel ({} lanes): {}x{} grid, limit {}, {:.2}ms",
        kernel.id(),
        kernel.lane_width(),
        grid.rows(),
        grid.cols(),
        config.iteration_limit(),
        elapsed
    );
}
