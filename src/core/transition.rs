//! Pure transition functions and the error raised when one rejects an event.

use super::state::State;
use std::fmt::{Debug, Display};

/// A state type with a pure transition function.
///
/// `on` looks only at the current state and the event. It returns the next
/// state, or `None` when the event is not allowed from here.
///
/// # Example
///
/// ```rust
/// use white_box::core::Transitions;
/// use white_box::machines::{VendingEvent, VendingState};
///
/// assert_eq!(
///     VendingState::Ready.on(VendingEvent::InsertCoin),
///     Some(VendingState::Dispensing)
/// );
/// assert_eq!(VendingState::Dispensing.on(VendingEvent::InsertCoin), None);
/// ```
pub trait Transitions: State {
    /// Events the machine reacts to.
    type Event: Copy + Debug + Display;

    /// Compute the next state for `event`, if any.
    fn on(&self, event: Self::Event) -> Option<Self>;
}

/// Errors that can occur when firing an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition for event '{event}' from state '{from}'")]
    NoTransition { from: String, event: String },
}
