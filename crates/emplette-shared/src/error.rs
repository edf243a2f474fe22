use thiserror::Error;

/// Caller-side input validation failures.
///
/// These are raised before any value reaches the store, mirroring the checks
/// the UI layer performs on its form fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 alphanumeric characters with a letter and a digit")]
    WeakPassword,

    #[error("Phone number cannot be empty")]
    EmptyPhone,

    #[error("List title cannot be empty")]
    EmptyListTitle,

    #[error("Item name cannot be empty")]
    EmptyItemName,
}

/// Password hashing / verification failures.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Failure to parse one of the closed domain enums from its wire string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown list status: {0}")]
    Status(String),

    #[error("Unknown priority: {0}")]
    Priority(String),

    #[error("Unknown list filter: {0}")]
    Filter(String),
}
