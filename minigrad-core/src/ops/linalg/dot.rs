use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;

/// Dot product of two equal-length vectors. The scalar result is a
/// length-1 vector. Saves both operands.
pub fn dot_op<T: Float>(
    ctx: &mut OpContext<T>,
    a: &Value<T>,
    b: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let xs = a.as_vector("dot")?;
    let ys = b.as_vector("dot")?;
    if xs.len() != ys.len() {
        return Err(MinigradError::ShapeMismatch {
            operation: "dot",
            expected: vec![xs.len()],
            actual: vec![ys.len()],
        });
    }
    let result = xs
        .iter()
        .zip(ys.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
    ctx.save_operands(a, b);
    Ok(Value::Vector(vec![result]))
}

/// Gradients of the dot product: `grad_a[i] = b[i] * upstream[0]` and
/// `grad_b[i] = a[i] * upstream[0]`. The upstream gradient must be scalar,
/// matching the forward output.
pub fn dot_backward<T: Float>(
    ctx: &OpContext<T>,
    upstream: &Value<T>,
) -> Result<(Value<T>, Value<T>), MinigradError> {
    let (a, b) = ctx.operands("dot")?;
    let xs = a.as_vector("dot backward")?;
    let ys = b.as_vector("dot backward")?;
    let gs = upstream.as_vector("dot backward")?;
    if gs.len() != 1 {
        return Err(MinigradError::ShapeMismatch {
            operation: "dot backward",
            expected: vec![1],
            actual: vec![gs.len()],
        });
    }
    let g = gs[0];
    let grad_a: Vec<T> = ys.iter().map(|&y| y * g).collect();
    let grad_b: Vec<T> = xs.iter().map(|&x| x * g).collect();
    Ok((Value::Vector(grad_a), Value::Vector(grad_b)))
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
