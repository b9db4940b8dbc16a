//! Core state machine types and logic.
//!
//! - State definitions via the `State` trait
//! - Pure transition functions via the `Transitions` trait
//! - Immutable history tracking
//! - `StateMachine`, the small driver the toy machines are built on

mod history;
mod machine;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use machine::StateMachine;
pub use state::State;
pub use transition::{TransitionError, Transitions};
