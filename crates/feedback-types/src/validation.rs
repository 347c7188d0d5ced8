use serde::Serialize;
use serde_json::Value;

use crate::api::{CreateFeedbackRequest, ErrorResponse};
use crate::messages;
use crate::models::NewFeedback;

/// First rule a create request broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
    pub field: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ErrorResponse {
    fn from(e: ValidationError) -> Self {
        ErrorResponse {
            message: e.message,
            field: Some(e.field),
        }
    }
}

/// Check a create request. Both the server and the client run this.
///
/// Fields are checked in order (`name`, then `content`); only the first
/// violation is reported. Any non-empty string is accepted; a missing,
/// `null` or non-string value is a violation on that field.
pub fn validate(req: &CreateFeedbackRequest) -> Result<NewFeedback, ValidationError> {
    let name = required(req.name.as_ref(), "name", messages::NAME_REQUIRED)?;
    let content = required(req.content.as_ref(), "content", messages::CONTENT_REQUIRED)?;

    Ok(NewFeedback {
        name: name.to_string(),
        content: content.to_string(),
    })
}

fn required<'a>(
    value: Option<&'a Value>,
    field: &str,
    message: &str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(Value::String(v)) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError {
            message: message.to_string(),
            field: field.to_string(),
        }),
    }
}
