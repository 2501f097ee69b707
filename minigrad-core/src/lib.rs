//! # minigrad-core
//!
//! A minimal per-operation automatic-differentiation engine. Six primitive
//! operations (elementwise multiply and add, ReLU, dot product,
//! sum-reduction, log-softmax) each expose a forward evaluation and a
//! backward gradient computation, linked through a caller-allocated
//! [`OpContext`] that records what the backward pass needs.
//!
//! There is no computation graph and no reverse traversal: the caller
//! allocates a fresh context per forward call and later invokes the matching
//! backward directly with an upstream gradient shaped like the forward
//! output. Values come in three shape classes — vector, matrix, and batch of
//! matrices — closed under the [`Value`] sum type; the elementwise binary
//! ops accept all three, the unary ops and dot are vector-only.

pub mod context;
pub mod error;
pub mod ops;
pub mod tensor;
pub mod value;

pub use context::{OpContext, Saved};
pub use error::MinigradError;
pub use tensor::Tensor;
pub use value::{Matrix, Value, ValueKind};

// Re-export for consumers writing generic code over element types.
pub use num_traits;
