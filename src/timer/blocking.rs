//! Blocking single-shot timer.

use super::TimerClient;
use crate::error::DoorError;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Timer that blocks the registering thread until it expires.
///
/// `register` sleeps for the full timeout on the caller's thread and then
/// invokes the client there. There is no way to cancel or shorten the wait.
/// Each registration replaces the previously stored client.
#[derive(Default)]
pub struct Timer<'a> {
    client: Option<&'a dyn TimerClient>,
}

impl<'a> Timer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block for `timeout`, then notify `client`.
    ///
    /// A `None` client fails immediately with [`DoorError::MissingClient`]
    /// without sleeping. Otherwise the client's result is returned as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use timed_door::{DoorError, TimedDoor, Timer};
    ///
    /// let door = TimedDoor::new(Duration::from_millis(10));
    /// let adapter = door.adapter();
    /// let mut timer = Timer::new();
    ///
    /// door.unlock()?;
    /// let result = timer.register(door.timeout(), Some(&adapter));
    /// assert!(matches!(result, Err(DoorError::OpenTooLong { .. })));
    ///
    /// assert_eq!(timer.register(door.timeout(), None), Err(DoorError::MissingClient));
    /// # Ok::<(), DoorError>(())
    /// ```
    pub fn register(
        &mut self,
        timeout: Duration,
        client: Option<&'a dyn TimerClient>,
    ) -> Result<(), DoorError> {
        let client = client.ok_or(DoorError::MissingClient)?;
        self.client = Some(client);

        debug!(?timeout, "timer registered, blocking until expiry");
        std::thread::sleep(timeout);
        debug!(?timeout, "timer expired");

        client.on_timeout()
    }

    /// Client from the most recent successful registration.
    pub fn client(&self) -> Option<&'a dyn TimerClient> {
        self.client
    }
}

impl fmt::Debug for Timer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("registered", &self.client.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Instant;

    #[test]
    fn missing_client_fails_without_blocking() {
        let mut timer = Timer::new();
        let started = Instant::now();

        let result = timer.register(Duration::from_secs(10), None);

        assert_eq!(result, Err(DoorError::MissingClient));
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(timer.client().is_none());
    }

    #[test]
    fn register_blocks_then_notifies_once() {
        let calls = Cell::new(0);
        let client = || -> Result<(), DoorError> {
            calls.set(calls.get() + 1);
            Ok(())
        };
        let mut timer = Timer::new();
        let started = Instant::now();

        timer
            .register(Duration::from_millis(50), Some(&client))
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(calls.get(), 1);
        assert!(timer.client().is_some());
    }

    #[test]
    fn client_error_is_propagated() {
        let client = || -> Result<(), DoorError> { Err(DoorError::TimerTask("boom".into())) };
        let mut timer = Timer::new();

        let result = timer.register(Duration::ZERO, Some(&client));

        assert_eq!(result, Err(DoorError::TimerTask("boom".into())));
    }

    #[test]
    fn registration_replaces_stored_client() {
        let first_calls = Cell::new(0);
        let second_calls = Cell::new(0);
        let first = || -> Result<(), DoorError> {
            first_calls.set(first_calls.get() + 1);
            Ok(())
        };
        let second = || -> Result<(), DoorError> {
            second_calls.set(second_calls.get() + 1);
            Ok(())
        };
        let mut timer = Timer::new();

        timer.register(Duration::ZERO, Some(&first)).unwrap();
        timer.register(Duration::ZERO, Some(&second)).unwrap();
        timer.client().unwrap().on_timeout().unwrap();

        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 2);
    }
}
