//! Uniform success/error wrapper returned by the repository

use std::fmt::Display;

/// Result of a repository call.
///
/// Failures never escape the repository as errors; they are folded into
/// `Error` carrying a human-readable message.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Error(String),
}

impl<T> Outcome<T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The error message, if this is an `Error`
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Error(message) => Outcome::Error(message),
        }
    }

    /// Convert into a standard `Result`, keeping the message as the error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(message) => Err(message),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error.to_string()),
        }
    }
}
