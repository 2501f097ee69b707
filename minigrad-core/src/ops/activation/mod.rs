//! Vector activation functions.

pub mod log_softmax;
pub mod relu;

pub use log_softmax::{log_softmax_backward, log_softmax_op};
pub use relu::{relu_backward, relu_op};
