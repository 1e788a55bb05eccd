use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            CartError::InvalidArgument
            | CartError::InvalidCode
            | CartError::EmptyCart
            | CartError::QuantityLimit => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::SessionNotFound | CartError::LineNotFound | CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &message)))
    }
}
