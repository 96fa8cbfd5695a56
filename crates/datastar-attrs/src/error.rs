use chrono::TimeDelta;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatastarError {
    #[error("duration must not be negative, but is: {0}")]
    NegativeDuration(TimeDelta),

    #[error("threshold must be between 0.0 (exclusive) and 1.0 (inclusive), but is: {0}")]
    ThresholdOutOfRange(f64),

    #[error("each key must have a value, but `{0}` has none")]
    UnpairedKey(String),

    #[error("signal values must be finite numbers, but one is: {0}")]
    NonFiniteSignal(f64),

    #[error("failed to encode signals: {0}")]
    Signals(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DatastarError>;
