use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("User id is not an integer: {0:?}")]
    NotAnInteger(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Structurally invalid input handed to the user service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User with the provided username or email already exists")]
    AlreadyExists,

    #[error("User with id {0} does not exist")]
    NotFound(UserId),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UsernameError> for UserError {
    fn from(err: UsernameError) -> Self {
        UserError::InvalidInput(err.into())
    }
}

impl From<EmailError> for UserError {
    fn from(err: EmailError) -> Self {
        UserError::InvalidInput(err.into())
    }
}
