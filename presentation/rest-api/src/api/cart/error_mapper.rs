use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound(_) | CartError::UnknownProduct(_) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::InsufficientStock { .. } | CartError::DuplicateProduct(_) => {
                (StatusCode::CONFLICT, "Conflict")
            }
            CartError::NetworkFailure => (StatusCode::BAD_GATEWAY, "UpstreamError"),
            CartError::Serialization | CartError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::value_objects::ProductId;
    use business::domain::errors::StorageError;

    #[test]
    fn should_map_insufficient_stock_to_conflict() {
        let (status, json) = CartError::InsufficientStock {
            product_id: ProductId::new(1),
            requested: 4,
            available: 3,
        }
        .into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "cart.insufficient_stock");
    }

    #[test]
    fn should_map_missing_cart_entry_to_not_found() {
        let (status, json) = CartError::ProductNotFound(ProductId::new(1)).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "cart.product_not_found");
    }

    #[test]
    fn should_map_invalid_amount_to_bad_request() {
        let (status, json) = CartError::InvalidAmount(0).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
    }

    #[test]
    fn should_map_network_failure_to_bad_gateway() {
        let (status, _) = CartError::NetworkFailure.into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn should_map_storage_failure_to_internal_error() {
        let (status, json) = CartError::Storage(StorageError::Write).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "storage.persistence");
    }
}
