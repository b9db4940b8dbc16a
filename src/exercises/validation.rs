//! Input validators.
//!
//! Validators with several independent rules are built from a `check_*`
//! function that runs every rule and accumulates ALL violations, so a caller
//! learns everything wrong with an input in one pass. The label-returning
//! function is a projection of that result.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Shortest password accepted by `check_password` and `authenticate_user`.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Allowed card number lengths.
pub const CARD_MIN_DIGITS: usize = 13;
pub const CARD_MAX_DIGITS: usize = 16;

/// Accepted year range.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Longest plain `http://` URL accepted. `https://` URLs are not limited.
pub const MAX_HTTP_URL_LEN: usize = 255;

/// 1 MiB.
pub const MAX_FILE_SIZE: i64 = 1_048_576;

/// Inclusive `(min, max)` lengths for `validate_login`.
pub const LOGIN_USERNAME_LEN: (usize, usize) = (5, 20);
pub const LOGIN_PASSWORD_LEN: (usize, usize) = (8, 15);

/// Inclusive `(min, max)` email length.
pub const EMAIL_LEN: (usize, usize) = (5, 50);

/// Shortest username `authenticate_user` accepts for a regular user.
pub const MIN_USERNAME_LEN: usize = 5;
const ADMIN_CREDENTIALS: (&str, &str) = ("admin", "admin123");

/// Age range `verify_age` accepts.
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 65;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must contain {what}")]
    Missing {
        field: &'static str,
        what: &'static str,
    },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Outcome of a multi-rule check.
pub type Checked = Validation<(), NonEmptyVec<Violation>>;

fn rule(ok: bool, violation: Violation) -> Checked {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn all(checks: Vec<Checked>) -> Checked {
    Validation::all_vec(checks).map(|_| ())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn has(s: &str, pred: impl Fn(char) -> bool) -> bool {
    s.chars().any(pred)
}

crate::label_enum! {
    /// Outcome of [`validate_credit_card`].
    pub enum CardCheck {
        Valid => "Valid Card",
        Invalid => "Invalid Card",
    }
}

crate::label_enum! {
    /// Outcome of [`validate_date`].
    pub enum DateCheck {
        Valid => "Valid Date",
        Invalid => "Invalid Date",
    }
}

crate::label_enum! {
    /// Outcome of [`validate_url`].
    pub enum UrlCheck {
        Valid => "Valid URL",
        Invalid => "Invalid URL",
    }
}

crate::label_enum! {
    /// Outcome of [`check_file_size`].
    pub enum FileSizeCheck {
        Valid => "Valid File Size",
        Invalid => "Invalid File Size",
    }
}

crate::label_enum! {
    /// Outcome of [`validate_login`].
    pub enum LoginResult {
        Successful => "Login Successful",
        Failed => "Login Failed",
    }
}

crate::label_enum! {
    /// Role granted by [`authenticate_user`].
    pub enum Role {
        Admin => "Admin",
        User => "User",
        Invalid => "Invalid",
    }
}

crate::label_enum! {
    /// Outcome of [`verify_age`].
    pub enum AgeCheck {
        Eligible => "Eligible",
        NotEligible => "Not Eligible",
    }
}

crate::label_enum! {
    /// Outcome of [`validate_email`].
    pub enum EmailCheck {
        Valid => "Valid Email",
        Invalid => "Invalid Email",
    }
}

/// Check every password rule.
///
/// A password needs at least eight characters and at least one uppercase
/// letter, lowercase letter, digit and ASCII punctuation or symbol.
/// Whitespace does not count as a special character.
pub fn check_password(password: &str) -> Checked {
    all(vec![
        rule(
            char_len(password) >= MIN_PASSWORD_LEN,
            Violation::TooShort {
                field: "password",
                min: MIN_PASSWORD_LEN,
            },
        ),
        rule(
            has(password, char::is_uppercase),
            Violation::Missing {
                field: "password",
                what: "an uppercase letter",
            },
        ),
        rule(
            has(password, char::is_lowercase),
            Violation::Missing {
                field: "password",
                what: "a lowercase letter",
            },
        ),
        rule(
            has(password, |c| c.is_ascii_digit()),
            Violation::Missing {
                field: "password",
                what: "a digit",
            },
        ),
        rule(
            has(password, |c| c.is_ascii_punctuation()),
            Violation::Missing {
                field: "password",
                what: "a special character",
            },
        ),
    ])
}

/// `true` when [`check_password`] finds no violation.
///
/// # Example
///
/// ```rust
/// use white_box::exercises::validate_password;
///
/// assert!(validate_password("Valid1Password!"));
/// assert!(!validate_password("Abcdefg1 "));
/// ```
pub fn validate_password(password: &str) -> bool {
    check_password(password).is_success()
}

/// A card number is 13 to 16 ASCII digits.
pub fn check_credit_card(number: &str) -> Checked {
    all(vec![
        rule(
            (CARD_MIN_DIGITS..=CARD_MAX_DIGITS).contains(&number.len()),
            Violation::Length {
                field: "card number",
                min: CARD_MIN_DIGITS,
                max: CARD_MAX_DIGITS,
            },
        ),
        rule(
            number.bytes().all(|b| b.is_ascii_digit()),
            Violation::Missing {
                field: "card number",
                what: "only digits",
            },
        ),
    ])
}

/// Label form of [`check_credit_card`].
pub fn validate_credit_card(number: &str) -> CardCheck {
    if check_credit_card(number).is_success() {
        CardCheck::Valid
    } else {
        CardCheck::Invalid
    }
}

/// Range check on each date component. Month lengths are not considered:
/// any day from 1 to 31 is accepted.
pub fn check_date(year: i32, month: u32, day: u32) -> Checked {
    all(vec![
        rule(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            Violation::OutOfRange {
                field: "year",
                min: MIN_YEAR.into(),
                max: MAX_YEAR.into(),
            },
        ),
        rule(
            (1..=12).contains(&month),
            Violation::OutOfRange {
                field: "month",
                min: 1,
                max: 12,
            },
        ),
        rule(
            (1..=31).contains(&day),
            Violation::OutOfRange {
                field: "day",
                min: 1,
                max: 31,
            },
        ),
    ])
}

/// Label form of [`check_date`].
pub fn validate_date(year: i32, month: u32, day: u32) -> DateCheck {
    if check_date(year, month, day).is_success() {
        DateCheck::Valid
    } else {
        DateCheck::Invalid
    }
}

/// Accept `https://` URLs of any length and `http://` URLs up to
/// [`MAX_HTTP_URL_LEN`] characters.
pub fn validate_url(url: &str) -> UrlCheck {
    let valid = url.starts_with("https://")
        || (url.starts_with("http://") && char_len(url) <= MAX_HTTP_URL_LEN);
    if valid {
        UrlCheck::Valid
    } else {
        UrlCheck::Invalid
    }
}

/// Sizes from 0 up to [`MAX_FILE_SIZE`] bytes are valid.
pub fn check_file_size(size: i64) -> FileSizeCheck {
    if (0..=MAX_FILE_SIZE).contains(&size) {
        FileSizeCheck::Valid
    } else {
        FileSizeCheck::Invalid
    }
}

/// Check the username and password lengths against [`LOGIN_USERNAME_LEN`]
/// and [`LOGIN_PASSWORD_LEN`].
pub fn check_login(username: &str, password: &str) -> Checked {
    let (user_min, user_max) = LOGIN_USERNAME_LEN;
    let (pass_min, pass_max) = LOGIN_PASSWORD_LEN;
    all(vec![
        rule(
            (user_min..=user_max).contains(&char_len(username)),
            Violation::Length {
                field: "username",
                min: user_min,
                max: user_max,
            },
        ),
        rule(
            (pass_min..=pass_max).contains(&char_len(password)),
            Violation::Length {
                field: "password",
                min: pass_min,
                max: pass_max,
            },
        ),
    ])
}

/// Label form of [`check_login`].
pub fn validate_login(username: &str, password: &str) -> LoginResult {
    if check_login(username, password).is_success() {
        LoginResult::Successful
    } else {
        LoginResult::Failed
    }
}

/// The built-in admin account, else any username of at least five
/// characters with a password of at least eight.
pub fn authenticate_user(username: &str, password: &str) -> Role {
    if (username, password) == ADMIN_CREDENTIALS {
        Role::Admin
    } else if char_len(username) >= MIN_USERNAME_LEN && char_len(password) >= MIN_PASSWORD_LEN {
        Role::User
    } else {
        Role::Invalid
    }
}

/// Eligible from [`MIN_AGE`] to [`MAX_AGE`] inclusive.
pub fn verify_age(age: u32) -> AgeCheck {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        AgeCheck::Eligible
    } else {
        AgeCheck::NotEligible
    }
}

/// Length plus the presence of `@` and `.`; no further structure is checked.
pub fn check_email(email: &str) -> Checked {
    let (min, max) = EMAIL_LEN;
    all(vec![
        rule(
            (min..=max).contains(&char_len(email)),
            Violation::Length {
                field: "email",
                min,
                max,
            },
        ),
        rule(
            email.contains('@'),
            Violation::Missing {
                field: "email",
                what: "'@'",
            },
        ),
        rule(
            email.contains('.'),
            Violation::Missing {
                field: "email",
                what: "'.'",
            },
        ),
    ])
}

/// Label form of [`check_email`].
pub fn validate_email(email: &str) -> EmailCheck {
    if check_email(email).is_success() {
        EmailCheck::Valid
    } else {
        EmailCheck::Invalid
    }
}
