pub mod kernel;
pub mod lanes;
pub mod scalar;
pub mod vector;

pub use kernel::{create_kernel, run_kernel, BaselineKernel, EscapeKernel, LaneKernel, KERNEL_IDS};
pub use lanes::EscapeLanes;
pub use scalar::{compute_baseline, compute_row_baseline, escape_time, EscapeBounds};
pub use vector::{
    compute_row_vectorized, compute_vectorized, compute_vectorized_with, escape_group,
    DefaultLanes,
};

// Re-export core types for convenience
pub use lanebrot_core::*;
