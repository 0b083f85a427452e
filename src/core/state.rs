//! State trait and the door's two states.
//!
//! States are plain values. Inspecting one never has side effects, which
//! keeps the door's transition rules testable without a running timer.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: transition rules compare states
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: history can be exported
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Position of a door.
///
/// The state is strictly binary. A door starts [`DoorState::Closed`] and
/// has no terminal state.
///
/// # Example
///
/// ```rust
/// use timed_door::core::{DoorState, State};
///
/// let state = DoorState::default();
/// assert_eq!(state, DoorState::Closed);
/// assert_eq!(state.name(), "Closed");
/// assert_eq!(state.to_string(), "closed");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    /// Whether the door is open.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl State for DoorState {
    fn name(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::Open => "Open",
        }
    }
}

impl Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed"),
            Self::Open => f.write_str("open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_closed() {
        assert_eq!(DoorState::default(), DoorState::Closed);
        assert!(!DoorState::default().is_open());
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(DoorState::Closed.name(), "Closed");
        assert_eq!(DoorState::Open.name(), "Open");
    }

    #[test]
    fn display_uses_lowercase_words() {
        assert_eq!(DoorState::Open.to_string(), "open");
        assert_eq!(DoorState::Closed.to_string(), "closed");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = DoorState::Open;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Open\"");
        let deserialized: DoorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
