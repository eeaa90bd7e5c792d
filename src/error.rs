use thiserror::Error;

/// Errors raised by the numeral engine.
///
/// Every failure is deterministic given its input, so callers are expected to
/// fix the call rather than retry it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type NumeralResult<T> = Result<T, NumeralError>;

macro_rules! invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::NumeralError::InvalidArgument(format!($($arg)*)))
    };
}

pub(crate) use invalid;
