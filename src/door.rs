//! The timed door.

use crate::core::{DoorState, State, StateHistory, StateTransition};
use crate::error::DoorError;
use crate::timer::DoorTimerAdapter;
use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Transitions a door keeps unless the builder says otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

#[derive(Debug, Default)]
struct DoorInner {
    state: DoorState,
    history: StateHistory<DoorState>,
}

/// A door with binary open/closed state and a fixed timeout.
///
/// The door starts closed. `unlock` and `lock` are the only transitions and
/// each fails without touching the state when called from the wrong state.
/// All methods take `&self` so a timer thread can observe the door while
/// another thread closes it.
///
/// # Example
///
/// ```rust
/// use timed_door::{DoorError, TimedDoor};
///
/// let door = TimedDoor::from_secs(5);
/// assert!(!door.is_open());
///
/// door.unlock()?;
/// assert!(door.is_open());
/// assert_eq!(door.unlock(), Err(DoorError::AlreadyOpen));
///
/// door.lock()?;
/// assert!(!door.is_open());
/// # Ok::<(), DoorError>(())
/// ```
#[derive(Debug)]
pub struct TimedDoor {
    timeout: Duration,
    history_limit: usize,
    inner: Mutex<DoorInner>,
}

impl TimedDoor {
    /// Create a closed door with the given timeout.
    pub fn new(timeout: Duration) -> Self {
        Self::with_options(timeout, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a closed door whose timeout is a whole number of seconds.
    pub fn from_secs(timeout_secs: u64) -> Self {
        Self::new(Duration::from_secs(timeout_secs))
    }

    pub(crate) fn with_options(timeout: Duration, history_limit: usize) -> Self {
        Self {
            timeout,
            history_limit,
            inner: Mutex::new(DoorInner::default()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn state(&self) -> DoorState {
        self.inner().state
    }

    /// Open the door.
    ///
    /// Fails with [`DoorError::AlreadyOpen`] if the door is already open.
    pub fn unlock(&self) -> Result<(), DoorError> {
        self.transition(DoorState::Closed, DoorState::Open, DoorError::AlreadyOpen)
    }

    /// Close the door.
    ///
    /// Fails with [`DoorError::AlreadyClosed`] if the door is already closed.
    pub fn lock(&self) -> Result<(), DoorError> {
        self.transition(DoorState::Open, DoorState::Closed, DoorError::AlreadyClosed)
    }

    /// How long the door may stay open.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout truncated to whole seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }

    /// Diagnostic probe that always fails with the current state.
    ///
    /// The returned error is [`DoorError::StateReport`], whose message reads
    /// "The door is currently open" or "The door is currently closed". The
    /// `Infallible` success type means there is no `Ok` to handle.
    ///
    /// ```rust
    /// use timed_door::{DoorError, TimedDoor};
    ///
    /// let door = TimedDoor::from_secs(5);
    /// door.unlock()?;
    ///
    /// let Err(report) = door.report_state();
    /// assert_eq!(report.to_string(), "The door is currently open");
    /// # Ok::<(), DoorError>(())
    /// ```
    pub fn report_state(&self) -> Result<Infallible, DoorError> {
        Err(DoorError::StateReport {
            state: self.state(),
        })
    }

    /// Snapshot of the most recent transitions, oldest first.
    ///
    /// Holds at most the door's history limit ([`DEFAULT_HISTORY_LIMIT`]
    /// unless set through the builder). Always empty when tracking was
    /// disabled.
    pub fn history(&self) -> StateHistory<DoorState> {
        self.inner().history.clone()
    }

    /// Timer client bound to this door.
    pub fn adapter(&self) -> DoorTimerAdapter<&Self> {
        DoorTimerAdapter::new(self)
    }

    fn transition(
        &self,
        from: DoorState,
        to: DoorState,
        rejection: DoorError,
    ) -> Result<(), DoorError> {
        let mut inner = self.inner();
        if inner.state != from {
            debug!(state = inner.state.name(), error = %rejection, "door transition rejected");
            return Err(rejection);
        }

        inner.state = to;
        inner
            .history
            .push_bounded(StateTransition::now(from, to), self.history_limit);
        debug!(from = from.name(), to = to.name(), "door transition");
        Ok(())
    }

    // A panic while holding the lock cannot leave the state half-written.
    fn inner(&self) -> MutexGuard<'_, DoorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
