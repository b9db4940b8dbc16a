//! Vending machine: a coin can only go in while the machine is ready.
//!
//! ```text
//!           insert_coin
//!   Ready ──────────────▶ Dispensing
//!     ▲                        │
//!     └────────────────────────┘
//!           dispense_drink
//! ```

use crate::core::{StateHistory, StateMachine, Transitions};
use crate::machines::respond;

/// Reply to an accepted coin.
pub const COIN_INSERTED: &str = "Coin Inserted. Select your drink.";
/// Reply to a dispensed drink.
pub const DRINK_DISPENSED: &str = "Drink Dispensed. Enjoy!";

crate::state_enum! {
    /// Position of a [`VendingMachine`].
    pub enum VendingState {
        Ready,
        Dispensing,
    }
}

crate::label_enum! {
    /// Operations a customer can perform.
    pub enum VendingEvent {
        InsertCoin => "insert_coin",
        DispenseDrink => "dispense_drink",
    }
}

impl Transitions for VendingState {
    type Event = VendingEvent;

    fn on(&self, event: VendingEvent) -> Option<Self> {
        match (self, event) {
            (Self::Ready, VendingEvent::InsertCoin) => Some(Self::Dispensing),
            (Self::Dispensing, VendingEvent::DispenseDrink) => Some(Self::Ready),
            _ => None,
        }
    }
}

/// A drinks machine that accepts one coin per drink.
///
/// Operations report failure through their return value; the state is left
/// unchanged when an operation is not allowed.
///
/// # Example
///
/// ```rust
/// use white_box::machines::{VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::new();
/// assert_eq!(machine.insert_coin(), "Coin Inserted. Select your drink.");
/// assert_eq!(machine.insert_coin(), "Invalid operation in current state.");
/// assert_eq!(machine.state(), VendingState::Dispensing);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    machine: StateMachine<VendingState>,
}

impl VendingMachine {
    /// A machine in the `Ready` state.
    pub fn new() -> Self {
        Self::with_state(VendingState::Ready)
    }

    /// A machine that starts in `state`.
    pub fn with_state(state: VendingState) -> Self {
        Self {
            machine: StateMachine::new("vending_machine", state),
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> VendingState {
        *self.machine.current_state()
    }

    /// Accept a coin. Only allowed from `Ready`.
    pub fn insert_coin(&mut self) -> &'static str {
        respond(&mut self.machine, VendingEvent::InsertCoin, COIN_INSERTED)
    }

    /// Hand out the selected drink. Only allowed from `Dispensing`.
    pub fn dispense_drink(&mut self) -> &'static str {
        respond(&mut self.machine, VendingEvent::DispenseDrink, DRINK_DISPENSED)
    }

    /// Every accepted operation, oldest first.
    pub fn history(&self) -> &StateHistory<VendingState> {
        self.machine.history()
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}
