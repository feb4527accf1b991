use thiserror::Error;

/// Errors that can occur while reading a snapshot or writing a plan.
/// These are system-level errors (I/O, parsing), not ledger invariant violations,
/// which panic instead.
#[derive(Error, Debug)]
pub enum SettleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SettleError>;
