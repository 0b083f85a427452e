//! Build errors for the door builder.

use thiserror::Error;

/// Errors that can occur when building a door.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Door timeout not specified. Call .timeout(duration) or .timeout_secs(n) before .build()")]
    MissingTimeout,
}
