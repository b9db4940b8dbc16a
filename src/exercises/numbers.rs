//! Arithmetic and numeric classification exercises.

use std::fmt;

/// Lowest score for each passing grade.
pub const GRADE_A: u32 = 90;
pub const GRADE_B: u32 = 80;
pub const GRADE_C: u32 = 70;

/// Closed range of Celsius values `celsius_to_fahrenheit` accepts.
pub const MIN_CELSIUS: f64 = -100.0;
pub const MAX_CELSIUS: f64 = 100.0;

crate::label_enum! {
    /// Sign of a number.
    pub enum NumberStatus {
        Negative => "Negative",
        Zero => "Zero",
        Positive => "Positive",
    }
}

crate::label_enum! {
    /// Letter grade for a score.
    pub enum Grade {
        A => "A",
        B => "B",
        C => "C",
        F => "F",
    }
}

crate::label_enum! {
    /// Whether three sides can form a triangle.
    pub enum TriangleCheck {
        Triangle => "Yes, it's a triangle!",
        NotTriangle => "No, it's not a triangle.",
    }
}

/// Result of [`celsius_to_fahrenheit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Temperature {
    Fahrenheit(f64),
    Invalid,
}

impl Temperature {
    /// The converted value, if the input was in range.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Fahrenheit(value) => Some(*value),
            Self::Invalid => None,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fahrenheit(value) => write!(f, "{value}"),
            Self::Invalid => f.write_str("Invalid Temperature"),
        }
    }
}

/// `true` when `n` is divisible by two, including zero and negatives.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// `a / b`, or `0` when `b` is zero.
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Classify `n` as negative, zero or positive.
pub fn check_number_status(n: i64) -> NumberStatus {
    match n.signum() {
        -1 => NumberStatus::Negative,
        0 => NumberStatus::Zero,
        _ => NumberStatus::Positive,
    }
}

/// Letter grade: 90 and up is A, 80 B, 70 C, anything lower F.
///
/// # Example
///
/// ```rust
/// use white_box::exercises::get_grade;
///
/// assert_eq!(get_grade(85), "B");
/// assert_eq!(get_grade(69), "F");
/// ```
pub fn get_grade(score: u32) -> Grade {
    if score >= GRADE_A {
        Grade::A
    } else if score >= GRADE_B {
        Grade::B
    } else if score >= GRADE_C {
        Grade::C
    } else {
        Grade::F
    }
}

/// Three sides form a triangle iff each is strictly shorter than the sum of
/// the other two.
pub fn is_triangle(a: f64, b: f64, c: f64) -> TriangleCheck {
    if a < b + c && b < a + c && c < a + b {
        TriangleCheck::Triangle
    } else {
        TriangleCheck::NotTriangle
    }
}

/// Convert to Fahrenheit. Inputs outside `[-100, 100]` are invalid.
pub fn celsius_to_fahrenheit(celsius: f64) -> Temperature {
    if (MIN_CELSIUS..=MAX_CELSIUS).contains(&celsius) {
        Temperature::Fahrenheit(celsius * 9.0 / 5.0 + 32.0)
    } else {
        Temperature::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_even_with_even_number() {
        assert!(is_even(0));
        assert!(is_even(-4));
    }

    #[test]
    fn is_even_with_odd_number() {
        assert!(!is_even(7));
        assert!(!is_even(-3));
    }

    #[test]
    fn divide_by_non_zero() {
        assert_eq!(divide(10.0, 2.0), 5.0);
    }

    #[test]
    fn divide_by_zero_returns_zero() {
        assert_eq!(divide(10.0, 0.0), 0.0);
    }

    #[test]
    fn number_status() {
        assert_eq!(check_number_status(-5), "Negative");
        assert_eq!(check_number_status(-3), NumberStatus::Negative);
        assert_eq!(check_number_status(0), "Zero");
        assert_eq!(check_number_status(8), "Positive");
        assert_eq!(check_number_status(7), "Positive");
    }

    #[test]
    fn grades() {
        assert_eq!(get_grade(95), "A");
        assert_eq!(get_grade(85), "B");
        assert_eq!(get_grade(75), "C");
        assert_eq!(get_grade(65), "F");
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(get_grade(90), Grade::A);
        assert_eq!(get_grade(89), Grade::B);
        assert_eq!(get_grade(80), Grade::B);
        assert_eq!(get_grade(70), Grade::C);
        assert_eq!(get_grade(69), Grade::F);
    }

    #[test]
    fn triangle_yes() {
        assert_eq!(is_triangle(3.0, 4.0, 5.0), "Yes, it's a triangle!");
    }

    #[test]
    fn triangle_no_when_c_too_long() {
        assert_eq!(is_triangle(3.0, 4.0, 7.0), "No, it's not a triangle.");
    }

    #[test]
    fn triangle_no_when_b_too_long() {
        assert_eq!(is_triangle(2.0, 3.0, 1.0), TriangleCheck::NotTriangle);
    }

    #[test]
    fn triangle_no_when_a_too_long() {
        assert_eq!(is_triangle(2.0, 1.0, 1.0), TriangleCheck::NotTriangle);
    }

    #[test]
    fn valid_temperatures() {
        assert_eq!(celsius_to_fahrenheit(0.0), Temperature::Fahrenheit(32.0));
        assert_eq!(celsius_to_fahrenheit(100.0), Temperature::Fahrenheit(212.0));
        assert_eq!(celsius_to_fahrenheit(-40.0), Temperature::Fahrenheit(-40.0));
        assert_eq!(celsius_to_fahrenheit(-100.0).value(), Some(-148.0));
    }

    #[test]
    fn invalid_temperatures() {
        assert_eq!(celsius_to_fahrenheit(-150.0), Temperature::Invalid);
        assert_eq!(celsius_to_fahrenheit(150.0).to_string(), "Invalid Temperature");
        assert_eq!(celsius_to_fahrenheit(100.5).value(), None);
    }

    #[test]
    fn temperature_display() {
        assert_eq!(celsius_to_fahrenheit(0.0).to_string(), "32");
    }
}
