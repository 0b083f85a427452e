//! Door states and transition history.
//!
//! Everything in this module is plain data with no side effects:
//! - State definitions via the `State` trait and `DoorState`
//! - Immutable history tracking

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{DoorState, State};
