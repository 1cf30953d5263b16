//! Route handlers for the gateway.

pub mod health;
pub mod signin;
pub mod signup;
pub mod types;
pub mod verify;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::cognito;
use self::types::ErrorResponse;

/// Collapse a provider failure into the uniform 400 error body.
pub(crate) fn provider_error(error: &cognito::Error) -> Response {
    error!("Provider call failed: {}", error);

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message: None,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognito::{Error, ErrorKind};

    #[tokio::test]
    async fn test_provider_error_is_bad_request() {
        let response = provider_error(&Error::Service {
            kind: ErrorKind::Other("UsernameExistsException".to_string()),
            message: "An account with the given email already exists.".to_string(),
        });

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "error": "UsernameExistsException: An account with the given email already exists.",
            })
        );
    }
}
