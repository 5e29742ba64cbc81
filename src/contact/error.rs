use thiserror::Error;

use super::form::FormField;

/// Failure of a contact submission.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The endpoint answered, but not with 200 or 201.
    #[error("Unexpected response: HTTP {status}")]
    UnexpectedResponse { status: u16 },

    /// The request never completed (connection, DNS, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Required-field constraint violated before submitting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please fill out the {} field.", .0.label())]
    Missing(FormField),

    #[error("Please enter a valid {} address.", .0.label().to_lowercase())]
    Invalid(FormField),
}

impl FieldError {
    pub fn field(self) -> FormField {
        match self {
            FieldError::Missing(field) | FieldError::Invalid(field) => field,
        }
    }
}
