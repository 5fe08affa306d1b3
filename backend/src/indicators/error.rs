use thiserror::Error;

/// Failures surfaced by indicator calculations instead of NaN / Infinity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Series too short for the requested window
    #[error("insufficient data: need at least {required} prices, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Zero period or a non-finite price in the input
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input that would divide by zero (e.g. a zero price in a return)
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}
