//! Vector linear algebra.

pub mod dot;

pub use dot::{dot_backward, dot_op};
