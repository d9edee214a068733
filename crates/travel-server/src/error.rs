use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use domain::DomainError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

const CREATE_FAILED: &str = "Error al crear el paquete";
const DELETE_FAILED: &str = "Error al eliminar el paquete";
const QUERY_FAILED: &str = "Error al consultar los paquetes";
const NOT_FOUND: &str = "Paquete no encontrado";

/// A failed request, rendered as `{ "error": "<message>" }`.
///
/// `message` is what the client sees; the domain error stays in the logs.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    #[source]
    source: DomainError,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str, source: DomainError) -> Self {
        Self {
            status,
            message,
            source,
        }
    }

    /// Any failure to create a package is the caller's field set being refused
    pub fn create(source: DomainError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, CREATE_FAILED, source)
    }

    /// Body could not be read as a package (bad JSON, wrong types, missing fields)
    pub fn rejected_body(rejection: JsonRejection) -> Self {
        Self::create(DomainError::Validation(rejection.body_text()))
    }

    pub fn delete(source: DomainError) -> Self {
        if source.is_not_found() {
            Self::new(StatusCode::NOT_FOUND, NOT_FOUND, source)
        } else {
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED, source)
        }
    }

    /// Reads only fail when the store does
    pub fn query(source: DomainError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, QUERY_FAILED, source)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.source, "{}", self.message);
        } else {
            warn!(status = %self.status, error = %self.source, "{}", self.message);
        }

        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_failures_are_bad_requests() {
        let validation = ApiError::create(DomainError::Validation("precio".into()));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let storage = ApiError::create(DomainError::Storage("locked".into()));
        assert_eq!(storage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(storage.message(), "Error al crear el paquete");
    }

    #[test]
    fn test_delete_mapping() {
        let missing = ApiError::delete(DomainError::NotFound("7".into()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.message(), "Paquete no encontrado");

        let broken = ApiError::delete(DomainError::Storage("io".into()));
        assert_eq!(broken.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(broken.message(), "Error al eliminar el paquete");
    }

    #[test]
    fn test_query_storage_failure_is_internal() {
        let err = ApiError::query(DomainError::Storage("io".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error al consultar los paquetes");
    }
}
