use serde::{Deserialize, Serialize};
use serde_json::Value;

// -- Routes --

pub const FEEDBACKS_PATH: &str = "/api/feedbacks";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A route both ends agree on.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
}

/// GET, no input, 200 with `Vec<Feedback>`.
pub const LIST: Route = Route {
    method: Method::Get,
    path: FEEDBACKS_PATH,
};

/// POST `CreateFeedbackRequest`, 201 with `Feedback` or 400 with `ErrorResponse`.
pub const CREATE: Route = Route {
    method: Method::Post,
    path: FEEDBACKS_PATH,
};

/// Substitute `:key` placeholders in a route path.
pub fn build_url(path: &str, params: &[(&str, &str)]) -> String {
    let mut url = path.to_string();
    for (key, value) in params {
        let placeholder = format!(":{}", key);
        if url.contains(&placeholder) {
            url = url.replace(&placeholder, value);
        }
    }
    url
}

// -- Feedback --

/// Body of a create request.
///
/// Fields take any JSON value so that a missing or wrong-typed field is
/// reported by validation with its name, same as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFeedbackRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl CreateFeedbackRequest {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            content: Some(Value::String(content.into())),
        }
    }

    /// Read a request from an arbitrary JSON body. Anything but an object
    /// carries no fields, so validation reports `name` as missing.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

// -- Errors --

/// Error body. `field` is present only for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}
