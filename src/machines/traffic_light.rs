//! Traffic light: a three-state cycle with no guards and no final state.
//!
//! ```text
//! Red ──▶ Green ──▶ Yellow ──┐
//!  ▲                         │
//!  └─────────────────────────┘
//! ```

use crate::core::{StateHistory, StateMachine};

crate::state_enum! {
    /// Colour currently shown by a [`TrafficLight`].
    pub enum LightState {
        Red,
        Green,
        Yellow,
    }
}

impl LightState {
    /// The cycle in order, starting from the initial colour.
    pub const CYCLE: [LightState; 3] = [Self::Red, Self::Green, Self::Yellow];

    /// The colour that follows this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

/// A traffic light that starts at red and cycles forever.
///
/// # Example
///
/// ```rust
/// use white_box::machines::{LightState, TrafficLight};
///
/// let mut light = TrafficLight::new();
/// assert_eq!(light.get_current_state(), LightState::Red);
///
/// light.change_state();
/// assert_eq!(light.get_current_state(), LightState::Green);
/// ```
#[derive(Clone, Debug)]
pub struct TrafficLight {
    machine: StateMachine<LightState>,
}

impl TrafficLight {
    /// A light showing red.
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("traffic_light", LightState::Red),
        }
    }

    /// Current colour. No side effects.
    pub fn get_current_state(&self) -> LightState {
        *self.machine.current_state()
    }

    /// Advance to the next colour in the cycle and return it.
    pub fn change_state(&mut self) -> LightState {
        let next = self.get_current_state().next();
        *self.machine.transition_to(next, "change_state")
    }

    /// Every colour change so far, oldest first.
    pub fn history(&self) -> &StateHistory<LightState> {
        self.machine.history()
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}
