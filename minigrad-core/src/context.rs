use crate::error::MinigradError;
use crate::value::Value;

/// State an operation's forward pass preserved for its backward pass.
///
/// Each operation saves exactly one of these variants, so a backward
/// implementation reads its state through a typed accessor instead of by
/// positional index into an untyped list.
#[derive(Debug, Clone)]
pub enum Saved<T> {
    /// Nothing saved yet, or the operation needs no state (Add).
    Empty,
    /// Both operands of a binary operation (Mul, Dot).
    Operands { lhs: Value<T>, rhs: Value<T> },
    /// The forward input (ReLU, Sum).
    Input(Value<T>),
    /// The forward output (LogSoftmax).
    Output(Value<T>),
}

/// Per-invocation record linking a forward call to its later backward call.
///
/// The caller allocates a fresh context per forward invocation; forward
/// populates it, backward reads it. Saved values are immutable once
/// recorded, so a repeated backward re-reads identical state. The context is
/// not internally synchronized; a caller sharing one across threads must
/// serialize access itself.
#[derive(Debug, Clone)]
pub struct OpContext<T> {
    saved: Saved<T>,
}

impl<T> OpContext<T> {
    pub fn new() -> Self {
        OpContext { saved: Saved::Empty }
    }

    pub(crate) fn save_operands(&mut self, lhs: &Value<T>, rhs: &Value<T>)
    where
        T: Clone,
    {
        self.saved = Saved::Operands {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        };
    }

    pub(crate) fn save_input(&mut self, input: &Value<T>)
    where
        T: Clone,
    {
        self.saved = Saved::Input(input.clone());
    }

    pub(crate) fn save_output(&mut self, output: &Value<T>)
    where
        T: Clone,
    {
        self.saved = Saved::Output(output.clone());
    }

    /// Both saved operands, or the context-underflow error if the matching
    /// forward never ran.
    pub(crate) fn operands(
        &self,
        operation: &'static str,
    ) -> Result<(&Value<T>, &Value<T>), MinigradError> {
        match &self.saved {
            Saved::Operands { lhs, rhs } => Ok((lhs, rhs)),
            _ => Err(MinigradError::MissingSavedState {
                operation,
                expected: "operands",
            }),
        }
    }

    pub(crate) fn input(&self, operation: &'static str) -> Result<&Value<T>, MinigradError> {
        match &self.saved {
            Saved::Input(input) => Ok(input),
            _ => Err(MinigradError::MissingSavedState {
                operation,
                expected: "input",
            }),
        }
    }

    pub(crate) fn output(&self, operation: &'static str) -> Result<&Value<T>, MinigradError> {
        match &self.saved {
            Saved::Output(output) => Ok(output),
            _ => Err(MinigradError::MissingSavedState {
                operation,
                expected: "output",
            }),
        }
    }
}

impl<T> Default for OpContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
