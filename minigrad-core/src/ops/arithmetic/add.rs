use crate::context::OpContext;
use crate::error::MinigradError;
use crate::value::Value;
use num_traits::Float;

/// Element-wise addition across any matching shape-class pair.
///
/// Addition needs no saved state: its backward is an identity pass-through.
/// The context parameter is kept so every forward shares one calling shape.
pub fn add_op<T: Float>(
    _ctx: &mut OpContext<T>,
    a: &Value<T>,
    b: &Value<T>,
) -> Result<Value<T>, MinigradError> {
    Value::zip_map(a, b, "add", |x, y| x + y)
}

/// Gradients of element-wise addition: the upstream gradient flows to both
/// inputs unchanged. Returns two independent copies, not one shared value,
/// so a later accumulation step may mutate either side.
pub fn add_backward<T: Float>(
    _ctx: &OpContext<T>,
    upstream: &Value<T>,
) -> Result<(Value<T>, Value<T>), MinigradError> {
    Ok((upstream.clone(), upstream.clone()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
