//! Errors raised when validating estimator input.

/// Reasons a diameter is rejected by the checked estimator entry points.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// NaN or infinite input.
    #[error("diameter must be a finite number, got {0}")]
    NotFinite(f64),

    /// Zero or negative input.
    #[error("diameter must be positive, got {0} m")]
    NonPositive(f64),
}
