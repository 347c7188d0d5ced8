use thiserror::Error;

use feedback_types::messages;
use feedback_types::validation::ValidationError;

/// Why a list or create call failed. `Display` is the user-facing message.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Caught locally, nothing was sent.
    #[error("{message}")]
    Validation { message: String, field: String },

    /// The server answered 400.
    #[error("{0}")]
    Rejected(String),

    /// Any other non-success status.
    #[error("{0}")]
    Failed(&'static str),

    /// The request never completed or the body did not match the contract.
    #[error("{message}")]
    Transport {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", messages::SUBMIT_IN_PROGRESS)]
    Busy,
}

impl From<ValidationError> for ClientError {
    fn from(e: ValidationError) -> Self {
        ClientError::Validation {
            message: e.message,
            field: e.field,
        }
    }
}

impl ClientError {
    pub(crate) fn transport(message: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| ClientError::Transport { message, source }
    }

    /// Field to highlight in a form, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            ClientError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
