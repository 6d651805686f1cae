use thiserror::Error;

/// Error types for the validated minimizer entry points
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MinimizerError {
    #[error("Invalid dimension or empty vector")]
    InvalidDimension,
    #[error("Step size must be nonzero and finite")]
    InvalidStepSize,
    #[error("Starting point is not finite or has a non-finite objective value")]
    InfeasibleStartingPoint,
}
