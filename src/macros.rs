//! Macros for declaring state and label enums with minimal boilerplate.

/// Generate a state enum and its `State` implementation.
///
/// Each variant's name defaults to the identifier; give `=> "label"` to
/// override it.
///
/// # Example
///
/// ```
/// use white_box::core::State;
/// use white_box::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Start,
///         InFlight => "In Flight",
///     }
/// }
///
/// assert_eq!(Phase::Start.name(), "Start");
/// assert_eq!(Phase::InFlight.to_string(), "In Flight");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@name $variant $($label)?)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

/// Generate a fieldless enum whose values print as fixed label strings.
///
/// Classification functions return these instead of bare strings. The enum
/// also compares equal to its label, so `get_grade(95) == "A"` holds.
///
/// # Example
///
/// ```
/// use white_box::label_enum;
///
/// label_enum! {
///     pub enum Verdict {
///         Accepted => "Accepted",
///         Rejected => "Rejected",
///     }
/// }
///
/// assert_eq!(Verdict::Accepted.as_str(), "Accepted");
/// assert_eq!(Verdict::Rejected, "Rejected");
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// The label this value prints as.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}
