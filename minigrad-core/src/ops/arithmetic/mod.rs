//! Element-wise arithmetic over all three shape classes.

pub mod add;
pub mod mul;

pub use add::{add_backward, add_op};
pub use mul::{mul_backward, mul_op};
