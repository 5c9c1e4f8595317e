//! Login Form Validation
//!
//! Pure validation of the login form fields. [`validate`] never performs I/O
//! and never raises an error: it returns every violated constraint so the
//! caller can decide whether to block submission and what to display.
//!
//! # Rules
//!
//! | Field      | Constraint                                  |
//! |------------|---------------------------------------------|
//! | `login`    | required, at least 6 characters, `[a-zA-Z ]` only |
//! | `password` | required, at least 8 characters             |
//!
//! An empty value only reports [`Constraint::Required`]; the length and
//! pattern checks skip empty input.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub const LOGIN_MIN_LENGTH: usize = 6;
pub const PASSWORD_MIN_LENGTH: usize = 8;

static LOGIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("login pattern is a valid regex"));

/// Form field a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Login,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Login => write!(f, "login"),
            Field::Password => write!(f, "password"),
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinLength { required: usize, actual: usize },
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub constraint: Constraint,
}

impl Violation {
    fn new(field: Field, constraint: Constraint) -> Self {
        Self { field, constraint }
    }

    /// Hint shown under the offending input.
    pub fn message(&self) -> String {
        match (&self.field, &self.constraint) {
            (Field::Login, Constraint::Required) => "Login ist erforderlich".to_string(),
            (Field::Password, Constraint::Required) => "Passwort ist erforderlich".to_string(),
            (Field::Login, Constraint::MinLength { required, .. }) => {
                format!("Login muss mindestens {} Zeichen lang sein", required)
            }
            (Field::Password, Constraint::MinLength { required, .. }) => {
                format!("Passwort muss mindestens {} Zeichen lang sein", required)
            }
            (_, Constraint::Pattern) => "Nur Buchstaben und Leerzeichen erlaubt".to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Validate both login form fields.
pub fn validate(login: &str, password: &str) -> Vec<Violation> {
    let mut violations = validate_login(login);
    violations.extend(validate_password(password));
    violations
}

pub fn validate_login(login: &str) -> Vec<Violation> {
    if login.is_empty() {
        return vec![Violation::new(Field::Login, Constraint::Required)];
    }

    let mut violations = Vec::new();
    let length = login.chars().count();
    if length < LOGIN_MIN_LENGTH {
        violations.push(Violation::new(
            Field::Login,
            Constraint::MinLength { required: LOGIN_MIN_LENGTH, actual: length },
        ));
    }
    if !LOGIN_PATTERN.is_match(login) {
        violations.push(Violation::new(Field::Login, Constraint::Pattern));
    }
    violations
}

pub fn validate_password(password: &str) -> Vec<Violation> {
    if password.is_empty() {
        return vec![Violation::new(Field::Password, Constraint::Required)];
    }

    let length = password.chars().count();
    if length < PASSWORD_MIN_LENGTH {
        return vec![Violation::new(
            Field::Password,
            Constraint::MinLength { required: PASSWORD_MIN_LENGTH, actual: length },
        )];
    }
    Vec::new()
}
