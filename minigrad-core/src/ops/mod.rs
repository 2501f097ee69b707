//! # Operation set
//!
//! The six primitives, grouped by category the way the rest of the crate is
//! consumed: each operation module exposes a `xxx_op` forward function and a
//! `xxx_backward` function. Forward takes a caller-allocated [`OpContext`]
//! and the operand values; backward takes the same context plus the upstream
//! gradient and returns one gradient per original input, shaped like that
//! input.
//!
//! No module here walks a graph: backward is invoked directly by the caller
//! with an externally supplied upstream gradient.
//!
//! [`OpContext`]: crate::context::OpContext

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod reduction;

pub use activation::{log_softmax_backward, log_softmax_op, relu_backward, relu_op};
pub use arithmetic::{add_backward, add_op, mul_backward, mul_op};
pub use linalg::{dot_backward, dot_op};
pub use reduction::{sum_backward, sum_op};
