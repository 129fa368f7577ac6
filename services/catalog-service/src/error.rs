use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use common::CatalogError;

use crate::types::ErrorResponse;

/// HTTP-facing wrapper over the catalog error taxonomy. The boundary
/// maps each variant to a status code and the `{ "error": ... }` body
/// the storefront client expects.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CatalogError::Validation { .. } => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Conflict(_) => StatusCode::CONFLICT,
            CatalogError::MissingPrice(_) | CatalogError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "catalog operation failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
