use crate::temperature::FloatValue;
use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum ClimixError {
    #[error("Expected {expected} monthly values, got {got}")]
    InvalidMonthCount { expected: usize, got: usize },
    #[error("Aridity index is undefined for an annual mean temperature of {temperature} degC")]
    UndefinedAridityIndex { temperature: FloatValue },
}

/// Convenience type for `Result<T, ClimixError>`.
pub type ClimixResult<T> = Result<T, ClimixError>;
