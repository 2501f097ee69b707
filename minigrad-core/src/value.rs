use crate::error::MinigradError;
use num_traits::Float;
use std::fmt::Debug;

/// Dense row-major matrix over a flat buffer.
///
/// This is the only numeric container the engine knows about; there is no
/// stride or view machinery, every matrix owns its buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Builds a matrix from a row-major buffer. The buffer length must equal
    /// `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MinigradError> {
        if data.len() != rows * cols {
            return Err(MinigradError::InvalidDimensions {
                rows,
                cols,
                data_len: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn zip_with<F>(&self, other: &Self, f: &F) -> Matrix<T>
    where
        F: Fn(T, T) -> T,
    {
        // Dimension equality is checked by the caller.
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}

/// Shape class of a [`Value`], used in error reporting and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Vector,
    Matrix,
    Batch,
}

/// A numeric value of one of the three supported shape classes.
///
/// The closed set of variants replaces runtime type inspection: every
/// operation pattern-matches the pair of variants it accepts and rejects the
/// rest as a typed error.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    /// Rank 1: an ordered sequence of scalars.
    Vector(Vec<T>),
    /// Rank 2: a dense row-major grid.
    Matrix(Matrix<T>),
    /// Rank 3: an ordered sequence of matrices, paired by index in binary ops.
    Batch(Vec<Matrix<T>>),
}

impl<T: Float> Value<T> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Vector(_) => ValueKind::Vector,
            Value::Matrix(_) => ValueKind::Matrix,
            Value::Batch(_) => ValueKind::Batch,
        }
    }

    /// Shape descriptor: `[n]`, `[r, c]`, or `[len, r0, c0]` for a batch
    /// (batches are uniform in practice; the first element is reported).
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Value::Vector(v) => vec![v.len()],
            Value::Matrix(m) => {
                let (r, c) = m.dims();
                vec![r, c]
            }
            Value::Batch(b) => match b.first() {
                Some(m) => {
                    let (r, c) = m.dims();
                    vec![b.len(), r, c]
                }
                None => vec![0],
            },
        }
    }

    pub fn numel(&self) -> usize {
        match self {
            Value::Vector(v) => v.len(),
            Value::Matrix(m) => m.numel(),
            Value::Batch(b) => b.iter().map(Matrix::numel).sum(),
        }
    }

    /// A zero-filled value of the same shape class and dimensions.
    pub fn zeros_like(&self) -> Value<T> {
        match self {
            Value::Vector(v) => Value::Vector(vec![T::zero(); v.len()]),
            Value::Matrix(m) => {
                let (r, c) = m.dims();
                Value::Matrix(Matrix::zeros(r, c))
            }
            Value::Batch(b) => Value::Batch(
                b.iter()
                    .map(|m| {
                        let (r, c) = m.dims();
                        Matrix::zeros(r, c)
                    })
                    .collect(),
            ),
        }
    }

    /// Borrows the underlying slice of a vector value, or reports the
    /// offending shape class for vector-only operations.
    pub fn as_vector(&self, operation: &'static str) -> Result<&[T], MinigradError> {
        match self {
            Value::Vector(v) => Ok(v),
            other => Err(MinigradError::UnsupportedKind {
                operation,
                kind: other.kind(),
            }),
        }
    }

    /// Applies `f` elementwise across two values of the same shape class and
    /// dimensions, producing a fresh value. This is the single rank-dispatch
    /// point for every binary elementwise operation: the batch case applies
    /// the matrix rule to each index-aligned pair.
    pub(crate) fn zip_map<F>(
        a: &Value<T>,
        b: &Value<T>,
        operation: &'static str,
        f: F,
    ) -> Result<Value<T>, MinigradError>
    where
        F: Fn(T, T) -> T,
    {
        match (a, b) {
            (Value::Vector(va), Value::Vector(vb)) => {
                if va.len() != vb.len() {
                    return Err(MinigradError::ShapeMismatch {
                        operation,
                        expected: vec![va.len()],
                        actual: vec![vb.len()],
                    });
                }
                Ok(Value::Vector(
                    va.iter().zip(vb.iter()).map(|(&x, &y)| f(x, y)).collect(),
                ))
            }
            (Value::Matrix(ma), Value::Matrix(mb)) => {
                if ma.dims() != mb.dims() {
                    let (er, ec) = ma.dims();
                    let (ar, ac) = mb.dims();
                    return Err(MinigradError::ShapeMismatch {
                        operation,
                        expected: vec![er, ec],
                        actual: vec![ar, ac],
                    });
                }
                Ok(Value::Matrix(ma.zip_with(mb, &f)))
            }
            (Value::Batch(ba), Value::Batch(bb)) => {
                if ba.len() != bb.len() {
                    return Err(MinigradError::ShapeMismatch {
                        operation,
                        expected: vec![ba.len()],
                        actual: vec![bb.len()],
                    });
                }
                let mut out = Vec::with_capacity(ba.len());
                for (ma, mb) in ba.iter().zip(bb.iter()) {
                    if ma.dims() != mb.dims() {
                        let (er, ec) = ma.dims();
                        let (ar, ac) = mb.dims();
                        return Err(MinigradError::ShapeMismatch {
                            operation,
                            expected: vec![er, ec],
                            actual: vec![ar, ac],
                        });
                    }
                    out.push(ma.zip_with(mb, &f));
                }
                Ok(Value::Batch(out))
            }
            (lhs, rhs) => Err(MinigradError::KindMismatch {
                operation,
                lhs: lhs.kind(),
                rhs: rhs.kind(),
            }),
        }
    }
}
