use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;

/// Rectified Linear Unit over a vector: `out[i] = max(0, x[i])`.
///
/// Saves the input; the backward gate re-tests the original input, not the
/// output.
pub fn relu_op<T: Float>(
    ctx: &mut OpContext<T>,
    input: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let xs = input.as_vector("relu")?;
    let output: Vec<T> = xs
        .iter()
        .map(|&x| if x > T::zero() { x } else { T::zero() })
        .collect();
    ctx.save_input(input);
    Ok(Value::Vector(output))
}

/// Gradient of ReLU: upstream where the saved input was strictly positive,
/// zero elsewhere. An input of exactly zero gets zero gradient.
pub fn relu_backward<T: Float>(
    ctx: &OpContext<T>,
    upstream: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let saved = ctx.input("relu")?;
    let xs = saved.as_vector("relu backward")?;
    let gs = upstream.as_vector("relu backward")?;
    if gs.len() != xs.len() {
        return Err(MinigradError::ShapeMismatch {
            operation: "relu backward",
            expected: vec![xs.len()],
            actual: vec![gs.len()],
        });
    }
    let grad: Vec<T> = xs
        .iter()
        .zip(gs.iter())
        .map(|(&x, &g)| if x > T::zero() { g } else { T::zero() })
        .collect();
    Ok(Value::Vector(grad))
}
