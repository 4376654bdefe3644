//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number does not match the required format.
    InvalidPhone(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone number should be in the format +380XXXXXXXXX, got: {}",
                phone
            ),
            Self::InvalidDate(date) => write!(
                f,
                "Incorrect date format, should be YYYY-MM-DD, got: {}",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
