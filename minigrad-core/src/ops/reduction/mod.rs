//! Reductions over vectors.

pub mod sum;

pub use sum::{sum_backward, sum_op};
