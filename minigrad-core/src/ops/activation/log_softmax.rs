use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;

/// Numerically stabilized log-softmax over a vector.
///
/// Log-sum-exp stabilization: subtract the maximum before exponentiating so
/// intermediates stay in range for large input magnitudes.
///
/// ```text
/// m      = max(x)
/// s[i]   = x[i] - m
/// Z      = Σ exp(s[i])
/// out[i] = s[i] - ln(Z)
/// ```
///
/// Saves the OUTPUT, not the raw input: the backward rule only needs
/// `exp(out[i])`, which is exactly `softmax[i]`.
pub fn log_softmax_op<T: Float>(
    ctx: &mut OpContext<T>,
    input: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let xs = input.as_vector("log_softmax")?;
    if xs.is_empty() {
        return Err(MinigradError::EmptyValue {
            operation: "log_softmax",
        });
    }

    let max = xs.iter().cloned().fold(T::neg_infinity(), T::max);
    let shifted: Vec<T> = xs.iter().map(|&x| x - max).collect();
    let exp_sum = shifted
        .iter()
        .map(|&s| s.exp())
        .fold(T::zero(), |acc, e| acc + e);
    let ln_z = exp_sum.ln();
    let output: Vec<T> = shifted.iter().map(|&s| s - ln_z).collect();

    let output = Value::Vector(output);
    ctx.save_output(&output);
    Ok(output)
}

/// Gradient of log-softmax via the saved output:
/// `grad[i] = upstream[i] - exp(out[i]) * Σ upstream`,
/// using `d(logsoftmax_i)/d(x_j) = δ_ij - softmax_j`.
pub fn log_softmax_backward<T: Float>(
    ctx: &OpContext<T>,
    upstream: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    let saved = ctx.output("log_softmax")?;
    let out = saved.as_vector("log_softmax backward")?;
    let gs = upstream.as_vector("log_softmax backward")?;
    if gs.len() != out.len() {
        return Err(MinigradError::ShapeMismatch {
            operation: "log_softmax backward",
            expected: vec![out.len()],
            actual: vec![gs.len()],
        });
    }

    let upstream_sum = gs.iter().fold(T::zero(), |acc, &g| acc + g);
    let grad: Vec<T> = out
        .iter()
        .zip(gs.iter())
        .map(|(&o, &g)| g - o.exp() * upstream_sum)
        .collect();
    Ok(Value::Vector(grad))
}

#[cfg(test)]
#[path = "log_softmax_test.rs"]
mod tests;
