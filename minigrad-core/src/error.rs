use crate::value::ValueKind;
use thiserror::Error;

/// Custom error type for the minigrad engine.
///
/// Every failure is a contract violation by the caller; no variant is
/// retried or recovered from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MinigradError {
    #[error("Shape mismatch in {operation}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Kind mismatch in {operation}: cannot pair {lhs:?} with {rhs:?}")]
    KindMismatch {
        operation: &'static str,
        lhs: ValueKind,
        rhs: ValueKind,
    },

    #[error("{operation} does not support {kind:?} operands")]
    UnsupportedKind {
        operation: &'static str,
        kind: ValueKind,
    },

    #[error("Backward for {operation} expected saved {expected}, but the context holds none; was forward called on this context?")]
    MissingSavedState {
        operation: &'static str,
        expected: &'static str,
    },

    #[error("Invalid dimensions: {rows}x{cols} matrix cannot hold a buffer of length {data_len}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        data_len: usize,
    },

    #[error("Shape mismatch during gradient accumulation: expected {expected:?}, got {actual:?}")]
    GradientAccumulationShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("{operation} requires a non-empty input")]
    EmptyValue { operation: &'static str },
}
