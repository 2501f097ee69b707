use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;

/// Sum of all elements of a vector, as a length-1 vector. Saves the input
/// (the backward only needs its length, but the whole value is kept so the
/// contract matches the other unary ops).
pub fn sum_op<T: Float>(
    ctx: &mut OpContext<T>,
    input: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let xs = input.as_vector("sum")?;
    let total = xs.iter().fold(T::zero(), |acc, &x| acc + x);
    ctx.save_input(input);
    Ok(Value::Vector(vec![total]))
}

/// Gradient of sum: the scalar upstream broadcast over every input slot.
pub fn sum_backward<T: Float>(
    ctx: &OpContext<T>,
    upstream: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let saved = ctx.input("sum")?;
    let xs = saved.as_vector("sum backward")?;
    let gs = upstream.as_vector("sum backward")?;
    if gs.len() != 1 {
        return Err(MinigradError::ShapeMismatch {
            operation: "sum backward",
            expected: vec![1],
            actual: vec![gs.len()],
        });
    }
    Ok(Value::Vector(vec![gs[0]; xs.len()]))
}
