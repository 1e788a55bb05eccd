use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.name_empty",
            ),
            CatalogError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.invalid_price",
            ),
            CatalogError::InvalidStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.invalid_stock",
            ),
            CatalogError::InvalidCode => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.invalid_code",
            ),
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.not_found"),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use business::domain::errors::RepositoryError;

    use super::*;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = CatalogError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "catalog.not_found");
    }

    #[test]
    fn should_map_unstorable_stock_to_400() {
        let (status, json) = CatalogError::InvalidStock.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "catalog.invalid_stock");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            CatalogError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
