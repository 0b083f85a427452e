//! Cancellable timer running on the tokio runtime.

use super::TimerClient;
use crate::error::DoorError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// How a scheduled timer finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The timeout elapsed and the client returned `Ok`
    Fired,
    /// The timer was cancelled before expiry; the client was not called
    Cancelled,
}

/// Handle to a timer started with [`schedule`].
///
/// Dropping the handle detaches the timer: it still fires, but its result
/// is discarded.
#[derive(Debug)]
pub struct TimerHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<TimerOutcome, DoorError>>,
}

impl TimerHandle {
    /// Ask the timer to stop before it expires.
    ///
    /// Returns `true` if the request was delivered to the timer task and
    /// `false` if the task had already finished waiting or a previous call
    /// consumed the request. Delivery does not guarantee the timer stopped:
    /// when the timeout elapses at the same moment the client may still be
    /// notified. [`join`](Self::join) reports what actually happened.
    pub fn cancel(&mut self) -> bool {
        self.cancel
            .take()
            .is_some_and(|cancel| cancel.send(()).is_ok())
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the timer to finish.
    ///
    /// Returns the client's error when it rejected the timeout, and
    /// [`DoorError::TimerTask`] when the timer task panicked.
    pub async fn join(self) -> Result<TimerOutcome, DoorError> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => Err(DoorError::TimerTask(e.to_string())),
        }
    }
}

/// Start a timer that notifies `client` once `timeout` has elapsed.
///
/// The wait runs as a tokio task, so this must be called from within a
/// runtime. Unlike [`Timer::register`](super::Timer::register) the caller
/// is never blocked.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use timed_door::{schedule, DoorTimerAdapter, TimedDoor, TimerOutcome};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), timed_door::DoorError> {
/// let door = Arc::new(TimedDoor::new(Duration::from_millis(20)));
/// door.unlock()?;
///
/// let handle = schedule(door.timeout(), Arc::new(DoorTimerAdapter::new(Arc::clone(&door))));
/// door.lock()?;
///
/// assert_eq!(handle.join().await?, TimerOutcome::Fired);
/// # Ok(())
/// # }
/// ```
pub fn schedule<C>(timeout: Duration, client: Arc<C>) -> TimerHandle
where
    C: TimerClient + Send + Sync + ?Sized + 'static,
{
    let (cancel_tx, cancel_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let sleep = tokio::time::sleep(timeout);
        tokio::pin!(sleep);

        tokio::select! {
            () = &mut sleep => {}
            cancelled = cancel_rx => {
                if cancelled.is_ok() {
                    debug!(?timeout, "scheduled timer cancelled");
                    return Ok(TimerOutcome::Cancelled);
                }
                // Handle dropped without cancelling; keep waiting.
                sleep.as_mut().await;
            }
        }

        debug!(?timeout, "scheduled timer expired");
        client.on_timeout().map(|()| TimerOutcome::Fired)
    });

    debug!(?timeout, "timer scheduled");
    TimerHandle {
        cancel: Some(cancel_tx),
        task,
    }
}
