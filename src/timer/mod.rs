//! Timers and the clients they notify.
//!
//! Two timers share the [`TimerClient`] capability:
//! - [`Timer`] blocks the calling thread for the whole timeout, then calls the client
//! - [`schedule`] runs the wait on the tokio runtime and returns a cancellable [`TimerHandle`]
//!
//! [`DoorTimerAdapter`] is the client that enforces "the door must be closed
//! before the timeout".

mod adapter;
mod blocking;
mod scheduled;

pub use adapter::DoorTimerAdapter;
pub use blocking::Timer;
pub use scheduled::{schedule, TimerHandle, TimerOutcome};

use crate::error::DoorError;

/// Callback target notified when a timer expires.
///
/// Any `Fn() -> Result<(), DoorError>` closure is a client, which keeps test
/// doubles short.
///
/// # Example
///
/// ```rust
/// use timed_door::{DoorError, TimerClient};
///
/// let client = || -> Result<(), DoorError> { Ok(()) };
/// assert!(client.on_timeout().is_ok());
/// ```
pub trait TimerClient {
    /// Called once the timeout has elapsed.
    fn on_timeout(&self) -> Result<(), DoorError>;
}

impl<F> TimerClient for F
where
    F: Fn() -> Result<(), DoorError>,
{
    fn on_timeout(&self) -> Result<(), DoorError> {
        self()
    }
}
