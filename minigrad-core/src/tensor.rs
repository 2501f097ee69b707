use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;
use std::cell::RefCell;
use std::rc::Rc;

/// Value-plus-metadata record the caller uses to track provenance.
///
/// Owns its data and gradient; holds a shared, non-exclusive handle to the
/// context that produced the data, so a future graph walker can reach the
/// producing operation's saved state without the primitives changing.
/// Operations themselves never touch this type.
#[derive(Debug, Clone)]
pub struct Tensor<T> {
    data: Value<T>,
    grad: Option<Value<T>>,
    shape: Vec<usize>,
    ctx: Option<Rc<RefCell<OpContext<T>>>>,
}

impl<T: Float + std::fmt::Debug> Tensor<T> {
    /// A leaf tensor: no producing context.
    pub fn new(data: Value<T>) -> Self {
        let shape = data.shape();
        Tensor {
            data,
            grad: None,
            shape,
            ctx: None,
        }
    }

    /// A tensor produced by an operation, keeping a handle to the context
    /// that forward call populated.
    pub fn from_op(data: Value<T>, ctx: Rc<RefCell<OpContext<T>>>) -> Self {
        let shape = data.shape();
        Tensor {
            data,
            grad: None,
            shape,
            ctx: Some(ctx),
        }
    }

    pub fn data(&self) -> &Value<T> {
        &self.data
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn grad(&self) -> Option<&Value<T>> {
        self.grad.as_ref()
    }

    pub fn ctx(&self) -> Option<&Rc<RefCell<OpContext<T>>>> {
        self.ctx.as_ref()
    }

    /// Adds `incoming` into the gradient accumulator, materializing it on
    /// first use. The incoming gradient must match the data's shape class
    /// and dimensions.
    pub fn accumulate_grad(&mut self, incoming: &Value<T>) -> Result<(), MinigradError> {
        if incoming.kind() != self.data.kind() || incoming.shape() != self.shape {
            return Err(MinigradError::GradientAccumulationShapeMismatch {
                expected: self.shape.clone(),
                actual: incoming.shape(),
            });
        }
        match self.grad.take() {
            Some(existing) => {
                let summed = Value::zip_map(&existing, incoming, "grad accumulation", |g, i| g + i)?;
                self.grad = Some(summed);
            }
            None => {
                log::debug!("materializing gradient buffer for shape {:?}", self.shape);
                self.grad = Some(incoming.clone());
            }
        }
        Ok(())
    }

    pub fn zero_grad(&mut self) {
        if self.grad.is_some() {
            self.grad = Some(self.data.zeros_like());
        }
    }
}
