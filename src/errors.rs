use thiserror::Error;

/// Error type that captures common scheduling failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid due date: {0}")]
    InvalidDate(String),
    #[error("Unsupported frequency: {0}")]
    UnsupportedFrequency(String),
    #[error("Frequency is not recurring")]
    NotRecurring,
    #[error("Roll-forward exceeded {0} steps")]
    TooManyIterations(usize),
}
