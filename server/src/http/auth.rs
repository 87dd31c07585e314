//! Optional shared-token check for the API routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::response::ApiError;
use super::AppState;

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "token";

/// Reject the request with 401 unless the `token` header matches the
/// configured token. A server without a token accepts everything.
pub async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(expected) = state.api_token.as_deref() {
        let provided = request
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            tracing::warn!(path = %request.uri().path(), "rejected request without a valid token");
            return ApiError::unauthorized().into_response();
        }
    }
    next.run(request).await
}
