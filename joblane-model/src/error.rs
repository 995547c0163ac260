use thiserror::Error;

/// Validation failures raised by the model types before any I/O happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown job status: {0}")]
    UnknownStatus(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("already applied")]
    AlreadyApplied,
}
