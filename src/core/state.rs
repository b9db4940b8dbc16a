//! Core State trait for machine states.
//!
//! Every toy machine in this crate stores its position as a value of a type
//! implementing this trait.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are small immutable values. The required supertraits let the
/// generic driver copy them into history records, compare them and log them.
///
/// # Example
///
/// ```rust
/// use white_box::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's display name.
    ///
    /// This is the label the exercises compare against, e.g. `"Red"`.
    fn name(&self) -> &str;
}
