//! Error mapping at the HTTP boundary.
//!
//! Every failure that reaches a handler becomes a 500 whose body is the
//! error message serialized as a JSON string. No structured error codes are
//! exposed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub struct AppError(pub Box<dyn std::error::Error + Send + Sync>);

impl AppError {
    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        error!(error = %message, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_becomes_500_with_json_message() {
        let err = AppError::from_error(std::io::Error::other("table missing"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let message: String = serde_json::from_slice(&body).unwrap();
        assert_eq!(message, "table missing");
    }
}
