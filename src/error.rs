//! Errors raised by the door and its timers.

use crate::core::DoorState;
use std::time::Duration;
use thiserror::Error;

/// Broad category of a [`DoorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operation was attempted from the wrong state
    IllegalState,
    /// A caller supplied an unusable argument
    InvalidArgument,
    /// A runtime condition was violated or reported
    RuntimeFailure,
}

/// Errors that can occur when operating a door or its timers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DoorError {
    #[error("Door is already opened")]
    AlreadyOpen,

    #[error("Door is already closed")]
    AlreadyClosed,

    #[error("Timer client cannot be null")]
    MissingClient,

    #[error("The door has been open too long (timeout: {timeout:?})")]
    OpenTooLong { timeout: Duration },

    #[error("The door is currently {state}")]
    StateReport { state: DoorState },

    #[error("Timer task failed: {0}")]
    TimerTask(String),
}

impl DoorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyOpen | Self::AlreadyClosed => ErrorKind::IllegalState,
            Self::MissingClient => ErrorKind::InvalidArgument,
            Self::OpenTooLong { .. } | Self::StateReport { .. } | Self::TimerTask(_) => {
                ErrorKind::RuntimeFailure
            }
        }
    }
}
