//! Error type for the non-arithmetic failure paths
//!
//! Projection arithmetic never fails: pathological inputs propagate as NaN,
//! Infinity or negative amounts. Errors only arise at the edges (reading
//! parameter files, writing output) and when a rent-to-buy delay falls outside
//! the projected horizon.

use thiserror::Error;

/// Errors raised by parameter sources, display sinks and the rent-to-buy projector
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// Period and delay must be whole, non-negative month counts
    #[error("invalid value {value} for parameter {name}: expected a whole number of months")]
    InvalidMonths { name: String, value: f64 },

    #[error("malformed parameter assignment {0:?}: expected name=value")]
    MalformedAssignment(String),

    #[error("rent-to-buy delay of {delay} months is outside the {period}-month horizon")]
    DelayOutOfRange { delay: u32, period: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
