//! White Box: small exercises for white-box unit testing.
//!
//! The crate has two halves:
//!
//! - **Exercises**: pure classification and calculation functions (grades,
//!   validators, discounts, shipping costs). Each returns a label enum that
//!   prints as the exact label string, or a number.
//! - **Machines**: toy state machines (traffic light, vending machine and a
//!   few others) built from explicit state enums with pure transition
//!   functions, driven by the small generic core.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Transitions**: A pure `on(state, event) -> Option<state>` function
//! - **History**: Every accepted transition is recorded
//!
//! # Example
//!
//! ```rust
//! use white_box::exercises::{calculate_items_shipping_cost, divide, Parcel};
//! use white_box::machines::{LightState, TrafficLight, VendingMachine};
//!
//! assert_eq!(divide(10.0, 0.0), 0.0);
//! assert_eq!(
//!     calculate_items_shipping_cost(&[Parcel::new(11.0)], "express"),
//!     Ok(40.0)
//! );
//!
//! let mut light = TrafficLight::new();
//! light.change_state();
//! assert_eq!(light.get_current_state(), LightState::Green);
//!
//! let mut vending = VendingMachine::new();
//! assert_eq!(vending.insert_coin(), "Coin Inserted. Select your drink.");
//! ```

mod macros;

pub mod core;
pub mod exercises;
pub mod machines;

// Re-export commonly used types
pub use crate::core::{
    State, StateHistory, StateMachine, StateTransition, TransitionError, Transitions,
};
pub use machines::{TrafficLight, VendingMachine};
