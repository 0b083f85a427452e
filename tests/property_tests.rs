//! Property-based tests for the door state machine.
//!
//! Random sequences of unlock/lock calls are checked against a plain
//! boolean model of the door.

use proptest::prelude::*;
use timed_door::{DoorError, DoorState, State, StateHistory, TimedDoor};

#[derive(Clone, Copy, Debug)]
enum Op {
    Unlock,
    Lock,
}

prop_compose! {
    fn arbitrary_op()(unlock in any::<bool>()) -> Op {
        if unlock { Op::Unlock } else { Op::Lock }
    }
}

prop_compose! {
    fn arbitrary_state()(open in any::<bool>()) -> DoorState {
        if open { DoorState::Open } else { DoorState::Closed }
    }
}

fn apply(door: &TimedDoor, op: Op) -> Result<(), DoorError> {
    match op {
        Op::Unlock => door.unlock(),
        Op::Lock => door.lock(),
    }
}

proptest! {
    #[test]
    fn state_matches_last_successful_transition(
        ops in prop::collection::vec(arbitrary_op(), 0..32)
    ) {
        let door = TimedDoor::from_secs(5);
        let mut model_open = false;

        for op in ops {
            let before = door.state();
            let result = apply(&door, op);

            match (op, model_open) {
                (Op::Unlock, false) => { prop_assert!(result.is_ok()); model_open = true; }
                (Op::Lock, true) => { prop_assert!(result.is_ok()); model_open = false; }
                (Op::Unlock, true) => {
                    prop_assert_eq!(result, Err(DoorError::AlreadyOpen));
                    prop_assert_eq!(door.state(), before);
                }
                (Op::Lock, false) => {
                    prop_assert_eq!(result, Err(DoorError::AlreadyClosed));
                    prop_assert_eq!(door.state(), before);
                }
            }

            prop_assert_eq!(door.is_open(), model_open);
        }
    }

    #[test]
    fn history_counts_only_successful_transitions(
        ops in prop::collection::vec(arbitrary_op(), 0..32)
    ) {
        let door = TimedDoor::from_secs(5);
        let successes = ops.iter().filter(|op| apply(&door, **op).is_ok()).count();

        let history = door.history();
        prop_assert_eq!(history.transitions().len(), successes);

        if let Some(last) = history.last() {
            prop_assert_eq!(last.to, door.state());
        } else {
            prop_assert_eq!(door.state(), DoorState::Closed);
        }

        for window in history.transitions().windows(2) {
            prop_assert_eq!(window[0].to, window[1].from);
            prop_assert!(window[0].timestamp <= window[1].timestamp);
        }
    }

    #[test]
    fn timeout_never_changes(secs in 0u64..10_000, ops in prop::collection::vec(arbitrary_op(), 0..16)) {
        let door = TimedDoor::from_secs(secs);
        for op in ops {
            let _ = apply(&door, op);
        }
        prop_assert_eq!(door.timeout_secs(), secs);
    }

    #[test]
    fn report_state_always_fails(ops in prop::collection::vec(arbitrary_op(), 0..16)) {
        let door = TimedDoor::from_secs(5);
        for op in ops {
            let _ = apply(&door, op);
        }

        let Err(err) = door.report_state();
        prop_assert_eq!(err, DoorError::StateReport { state: door.state() });
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
        prop_assert_eq!(state.is_open(), state.name() == "Open");
    }

    #[test]
    fn history_roundtrip_serialization(ops in prop::collection::vec(arbitrary_op(), 0..8)) {
        let door = TimedDoor::from_secs(5);
        for op in ops {
            let _ = apply(&door, op);
        }
        let history = door.history();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<DoorState> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(history.get_path(), deserialized.get_path());
    }
}
