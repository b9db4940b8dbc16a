//! Generic driver that owns a machine's current state and history.

use crate::core::history::{StateHistory, StateTransition};
use crate::core::state::State;
use crate::core::transition::{TransitionError, Transitions};
use chrono::Utc;

/// Holds the current state of one machine and every transition it made.
///
/// The toy machines wrap one of these and expose their own operations on
/// top. All mutation goes through [`StateMachine::transition_to`] so the
/// history can never disagree with the current state.
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    name: &'static str,
    current: S,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine called `name` sitting in `initial`.
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            name,
            current: initial,
            history: StateHistory::new(),
        }
    }

    /// Machine name, used as the `machine` field of log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Move to `to` unconditionally and record the transition under `event`.
    pub fn transition_to(&mut self, to: S, event: &str) -> &S {
        let from = self.current;
        tracing::debug!(
            machine = self.name,
            from = from.name(),
            to = to.name(),
            event,
            "state transition"
        );
        self.history.push(StateTransition {
            from,
            to,
            event: event.to_string(),
            timestamp: Utc::now(),
        });
        self.current = to;
        &self.current
    }
}

impl<S: Transitions> StateMachine<S> {
    /// Fire `event` against the current state.
    ///
    /// On rejection the state and history are left untouched.
    pub fn fire(&mut self, event: S::Event) -> Result<&S, TransitionError> {
        let event_name = event.to_string();
        match self.current.on(event) {
            Some(next) => Ok(self.transition_to(next, &event_name)),
            None => {
                tracing::warn!(
                    machine = self.name,
                    from = self.current.name(),
                    event = %event_name,
                    "event rejected in current state"
                );
                Err(TransitionError::NoTransition {
                    from: self.current.name().to_string(),
                    event: event_name,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum WorkflowState {
        Initial,
        Processing,
        Complete,
    }

    impl State for WorkflowState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    impl Transitions for WorkflowState {
        type Event = &'static str;

        fn on(&self, event: &'static str) -> Option<Self> {
            match (self, event) {
                (Self::Initial, "start") => Some(Self::Processing),
                (Self::Processing, "finish") => Some(Self::Complete),
                _ => None,
            }
        }
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = StateMachine::new("workflow", WorkflowState::Initial);

        assert_eq!(machine.name(), "workflow");
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn fire_moves_to_next_state() {
        let mut machine = StateMachine::new("workflow", WorkflowState::Initial);

        let state = machine.fire("start").unwrap();

        assert_eq!(state, &WorkflowState::Processing);
        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.history().transitions()[0].event, "start");
    }

    #[test]
    fn rejected_event_leaves_machine_untouched() {
        let mut machine = StateMachine::new("workflow", WorkflowState::Initial);

        let result = machine.fire("finish");

        assert_eq!(
            result,
            Err(TransitionError::NoTransition {
                from: "Initial".to_string(),
                event: "finish".to_string(),
            })
        );
        assert_eq!(machine.current_state(), &WorkflowState::Initial);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn transition_to_bypasses_transition_function() {
        let mut machine = StateMachine::new("workflow", WorkflowState::Initial);

        machine.transition_to(WorkflowState::Complete, "skip");

        assert_eq!(machine.current_state(), &WorkflowState::Complete);
        assert_eq!(machine.history().transitions()[0].from, WorkflowState::Initial);
    }

    #[test]
    fn multi_step_workflow_records_path() {
        let mut machine = StateMachine::new("workflow", WorkflowState::Initial);

        machine.fire("start").unwrap();
        machine.fire("finish").unwrap();

        let path = machine.history().get_path();
        assert_eq!(
            path,
            vec![
                &WorkflowState::Initial,
                &WorkflowState::Processing,
                &WorkflowState::Complete
            ]
        );
    }
}
