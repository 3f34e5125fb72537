use thiserror::Error;

/// Precondition violations raised by the simulation components.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("Weibull model is undefined at x = {x}")]
    Domain { x: f64 },

    #[error("shape mismatch: expected {expected}, found {found}")]
    Shape { expected: usize, found: usize },

    #[error("cannot aggregate over zero rows")]
    EmptyInput,

    #[error("invalid model parameters: {0}")]
    Parameters(String),
}
