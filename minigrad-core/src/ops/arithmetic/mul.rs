use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;

/// Element-wise multiplication across any matching shape-class pair.
///
/// Saves both operands for the backward pass. Validation happens before
/// saving, so a failed forward leaves the context empty.
pub fn mul_op<T: Float>(
    ctx: &mut OpContext<T>,
    a: &Value<T>,
    b: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let output = Value::zip_map(a, b, "mul", |x, y| x * y)?;
    ctx.save_operands(a, b);
    Ok(output)
}

/// Gradients of element-wise multiplication.
///
/// grad_a = b ⊙ upstream, grad_b = a ⊙ upstream, each shaped like the
/// corresponding operand.
pub fn mul_backward<T: Float>(
    ctx: &OpContext<T>,
    upstream: &Value<T>,
) -> Result<(Value<T>, Value<T>), MinigradError> {
    let (a, b) = ctx.operands("mul")?;
    let grad_a = Value::zip_map(b, upstream, "mul backward", |y, g| y * g)?;
    let grad_b = Value::zip_map(a, upstream, "mul backward", |x, g| x * g)?;
    Ok((grad_a, grad_b))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
