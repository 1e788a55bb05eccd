use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    /// Rejection of a request before any use case ran (bad path or body value).
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
