//! Timed door: a two-state door guarded by a timeout.
//!
//! A [`TimedDoor`] is either open or closed. A timer notifies a
//! [`TimerClient`] once the door's timeout has elapsed; the door's own
//! client, [`DoorTimerAdapter`], fails if the door is still open by then.
//!
//! # Core Concepts
//!
//! - **Door**: binary state, a fixed timeout and a transition history
//! - **Timer**: blocks the calling thread for the timeout, then notifies its client
//! - **Scheduled timer**: the same contract on the tokio runtime, with cancellation
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use timed_door::{DoorError, TimedDoor, Timer};
//!
//! let door = TimedDoor::new(Duration::from_millis(20));
//! door.unlock()?;
//!
//! std::thread::scope(|s| -> Result<(), DoorError> {
//!     let timer = s.spawn(|| {
//!         let adapter = door.adapter();
//!         let mut timer = Timer::new();
//!         timer.register(door.timeout(), Some(&adapter))
//!     });
//!
//!     // Closing before expiry keeps the timer quiet.
//!     door.lock()?;
//!     timer.join().expect("timer thread panicked")
//! })?;
//! # Ok::<(), DoorError>(())
//! ```

pub mod builder;
pub mod core;
pub mod door;
pub mod error;
pub mod timer;

// Re-export commonly used types
pub use builder::{BuildError, TimedDoorBuilder};
pub use crate::core::{DoorState, State, StateHistory, StateTransition};
pub use door::{TimedDoor, DEFAULT_HISTORY_LIMIT};
pub use error::{DoorError, ErrorKind};
pub use timer::{schedule, DoorTimerAdapter, Timer, TimerClient, TimerHandle, TimerOutcome};
