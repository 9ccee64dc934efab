//! Synchronous field checks.
//!
//! These are UX hints only; the server applies the real rules. Each check is
//! evaluated independently so the page can flag every bad field at once.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::MIN_PASSWORD_LEN;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Permissive `local@domain.tld` shape check.
///
/// Exactly one `@`, no whitespace, at least one `.` after the `@` with text on
/// both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Per-field outcome of a login submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginCheck {
    pub email: bool,
    pub password: bool,
}

impl LoginCheck {
    pub fn evaluate(email: &str, password: &str) -> Self {
        Self {
            email: is_valid_email(email),
            password: !password.is_empty(),
        }
    }

    pub fn passed(&self) -> bool {
        self.email && self.password
    }
}

/// Per-field outcome of a registration submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationCheck {
    pub name: bool,
    pub email: bool,
    pub password: bool,
    pub confirm_password: bool,
}

impl RegistrationCheck {
    pub fn evaluate(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: !name.is_empty(),
            email: is_valid_email(email),
            password: password.chars().count() >= MIN_PASSWORD_LEN,
            confirm_password: password == confirm_password,
        }
    }

    pub fn passed(&self) -> bool {
        self.name && self.email && self.password && self.confirm_password
    }
}
