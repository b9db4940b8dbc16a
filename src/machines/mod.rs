//! Toy state machines.
//!
//! Each machine is a state enum with a pure transition function plus a thin
//! wrapper exposing the exercise's operations. Operations that are not
//! allowed in the current state leave it unchanged and return
//! [`INVALID_OPERATION`].

mod document;
mod elevator;
mod traffic_light;
mod user_auth;
mod vending_machine;

pub use document::{
    DocumentEditingSystem, DocumentEvent, DocumentState, DOCUMENT_SAVED, EDITING_DOCUMENT,
};
pub use elevator::{ElevatorEvent, ElevatorState, ElevatorSystem, MOVING_DOWN, MOVING_UP, STOPPED};
pub use traffic_light::{LightState, TrafficLight};
pub use user_auth::{
    SessionEvent, SessionState, UserAuthentication, LOGIN_SUCCESSFUL, LOGOUT_SUCCESSFUL,
};
pub use vending_machine::{
    VendingEvent, VendingMachine, VendingState, COIN_INSERTED, DRINK_DISPENSED,
};

use crate::core::{StateMachine, Transitions};

/// Returned by every guarded operation that is not allowed right now.
pub const INVALID_OPERATION: &str = "Invalid operation in current state.";

/// Fire `event` and answer with `success` or [`INVALID_OPERATION`].
fn respond<S: Transitions>(
    machine: &mut StateMachine<S>,
    event: S::Event,
    success: &'static str,
) -> &'static str {
    match machine.fire(event) {
        Ok(_) => success,
        Err(_) => INVALID_OPERATION,
    }
}
