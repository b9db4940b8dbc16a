//! Elevator: it must stop before it can change direction.
//!
//! ```text
//!              move_up                 move_down
//!   Moving Up ◀──────── Idle ────────▶ Moving Down
//!       │                ▲  ▲               │
//!       └──── stop ──────┘  └───── stop ────┘
//! ```

use crate::core::{StateHistory, StateMachine, Transitions};
use crate::machines::respond;

/// Replies to successful elevator operations.
pub const MOVING_UP: &str = "Elevator moving up.";
pub const MOVING_DOWN: &str = "Elevator moving down.";
pub const STOPPED: &str = "Elevator stopped.";

crate::state_enum! {
    /// Motion of an [`ElevatorSystem`].
    pub enum ElevatorState {
        Idle,
        MovingUp => "Moving Up",
        MovingDown => "Moving Down",
    }
}

impl ElevatorState {
    /// `true` in either moving state.
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::MovingUp | Self::MovingDown)
    }
}

crate::label_enum! {
    /// Operations the elevator accepts.
    pub enum ElevatorEvent {
        MoveUp => "move_up",
        MoveDown => "move_down",
        Stop => "stop",
    }
}

impl Transitions for ElevatorState {
    type Event = ElevatorEvent;

    fn on(&self, event: ElevatorEvent) -> Option<Self> {
        match (self, event) {
            (Self::Idle, ElevatorEvent::MoveUp) => Some(Self::MovingUp),
            (Self::Idle, ElevatorEvent::MoveDown) => Some(Self::MovingDown),
            (state, ElevatorEvent::Stop) if state.is_moving() => Some(Self::Idle),
            _ => None,
        }
    }
}

/// A single elevator car. Starts `Idle`.
#[derive(Clone, Debug)]
pub struct ElevatorSystem {
    machine: StateMachine<ElevatorState>,
}

impl ElevatorSystem {
    /// An idle elevator.
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("elevator", ElevatorState::Idle),
        }
    }

    /// Current motion.
    pub fn state(&self) -> ElevatorState {
        *self.machine.current_state()
    }

    /// Start moving up. Only allowed when idle.
    pub fn move_up(&mut self) -> &'static str {
        respond(&mut self.machine, ElevatorEvent::MoveUp, MOVING_UP)
    }

    /// Start moving down. Only allowed when idle.
    pub fn move_down(&mut self) -> &'static str {
        respond(&mut self.machine, ElevatorEvent::MoveDown, MOVING_DOWN)
    }

    /// Stop a moving elevator. Stopping an idle one is rejected.
    pub fn stop(&mut self) -> &'static str {
        respond(&mut self.machine, ElevatorEvent::Stop, STOPPED)
    }

    /// Every accepted move and stop, oldest first.
    pub fn history(&self) -> &StateHistory<ElevatorState> {
        self.machine.history()
    }
}

impl Default for ElevatorSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::INVALID_OPERATION;

    #[test]
    fn starts_idle() {
        let elevator = ElevatorSystem::new();
        assert_eq!(elevator.state(), ElevatorState::Idle);
        assert!(!elevator.state().is_moving());
    }

    #[test]
    fn up_stop_down_stop() {
        let mut elevator = ElevatorSystem::new();

        assert_eq!(elevator.move_up(), MOVING_UP);
        assert_eq!(elevator.state().to_string(), "Moving Up");
        assert_eq!(elevator.stop(), STOPPED);
        assert_eq!(elevator.move_down(), MOVING_DOWN);
        assert_eq!(elevator.state(), ElevatorState::MovingDown);
        assert_eq!(elevator.stop(), STOPPED);
        assert_eq!(elevator.state(), ElevatorState::Idle);
    }

    #[test]
    fn cannot_reverse_without_stopping() {
        let mut elevator = ElevatorSystem::new();
        elevator.move_up();

        assert_eq!(elevator.move_down(), INVALID_OPERATION);
        assert_eq!(elevator.move_up(), INVALID_OPERATION);
        assert_eq!(elevator.state(), ElevatorState::MovingUp);
    }

    #[test]
    fn stopping_idle_elevator_is_rejected() {
        let mut elevator = ElevatorSystem::new();

        assert_eq!(elevator.stop(), INVALID_OPERATION);
        assert!(elevator.history().is_empty());
    }
}
