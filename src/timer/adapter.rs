//! Timer client bound to a door.

use super::TimerClient;
use crate::door::TimedDoor;
use crate::error::DoorError;
use std::ops::Deref;
use tracing::warn;

/// Reports a violation when its door is still open at timeout.
///
/// The adapter never owns or closes the door. `D` is how it reaches the
/// door: `&TimedDoor` ties the adapter to the door's lifetime, while
/// `Arc<TimedDoor>` lets it move into a scheduled timer task.
///
/// # Example
///
/// ```rust
/// use timed_door::{DoorError, TimedDoor, TimerClient};
///
/// let door = TimedDoor::from_secs(5);
/// let adapter = door.adapter();
/// assert!(adapter.on_timeout().is_ok());
///
/// door.unlock()?;
/// assert!(matches!(adapter.on_timeout(), Err(DoorError::OpenTooLong { .. })));
/// # Ok::<(), DoorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DoorTimerAdapter<D> {
    door: D,
}

impl<D: Deref<Target = TimedDoor>> DoorTimerAdapter<D> {
    pub fn new(door: D) -> Self {
        Self { door }
    }

    pub fn door(&self) -> &TimedDoor {
        &self.door
    }
}

impl<D: Deref<Target = TimedDoor>> TimerClient for DoorTimerAdapter<D> {
    fn on_timeout(&self) -> Result<(), DoorError> {
        if self.door.is_open() {
            let timeout = self.door.timeout();
            warn!(?timeout, "door left open past its timeout");
            return Err(DoorError::OpenTooLong { timeout });
        }
        Ok(())
    }
}
