//! Builder API for creating doors.
//!
//! ```rust
//! use std::time::Duration;
//! use timed_door::TimedDoorBuilder;
//!
//! let door = TimedDoorBuilder::new()
//!     .timeout(Duration::from_secs(5))
//!     .track_history(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(door.timeout_secs(), 5);
//! ```

mod error;

pub use error::BuildError;

use crate::door::{TimedDoor, DEFAULT_HISTORY_LIMIT};
use std::time::Duration;

/// Builder for [`TimedDoor`].
#[derive(Debug, Clone)]
pub struct TimedDoorBuilder {
    timeout: Option<Duration>,
    track_history: bool,
    history_limit: usize,
}

impl TimedDoorBuilder {
    pub fn new() -> Self {
        Self {
            timeout: None,
            track_history: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set how long the door may stay open
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the timeout in whole seconds
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Record transitions in the door's history (on by default)
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Keep at most `limit` recent transitions; older ones are dropped
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the door, closed.
    pub fn build(self) -> Result<TimedDoor, BuildError> {
        let timeout = self.timeout.ok_or(BuildError::MissingTimeout)?;
        let history_limit = if self.track_history {
            self.history_limit
        } else {
            0
        };
        Ok(TimedDoor::with_options(timeout, history_limit))
    }
}

impl Default for TimedDoorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
