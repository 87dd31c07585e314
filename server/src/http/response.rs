//! The response envelope and the error-to-status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::ServiceError;

/// `{"code": .., "data": ..}` on success, `{"code": .., "error": ..}` on
/// failure.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(status: StatusCode, data: T) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                code: status.as_u16(),
                data: Some(data),
                error: None,
            }),
        )
    }
}

/// A failed request: the status and the message rendered in `error`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "missing or invalid token")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope::<()> {
            code: self.status.as_u16(),
            data: None,
            error: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ServiceError::Conflict(message) => Self::new(StatusCode::CONFLICT, message),
            ServiceError::Validation(e) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ServiceError::Storage(e) => {
                tracing::warn!(error = %e, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal storage error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceError;
    use mercado_domain::ValidationError;

    #[test]
    fn test_envelope_omits_error_on_success() {
        let (status, Json(body)) = Envelope::data(StatusCode::OK, Vec::<i64>::new());
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"code":200,"data":[]}"#
        );
    }

    #[test]
    fn test_service_errors_map_to_statuses() {
        let cases = [
            (
                ServiceError::NotFound { label: "buyer", id: 1 },
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::Conflict("cid already exists".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::Validation(ValidationError::Missing("address")),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ServiceError::Storage(PersistenceError::Migration("broken".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_storage_details_are_not_leaked() {
        let err = ApiError::from(ServiceError::Storage(PersistenceError::Migration(
            "table sellers: syntax error".to_string(),
        )));
        assert_eq!(err.message, "internal storage error");
    }
}
