use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Handler error. Every service failure is answered with 500 and the bare
/// message as plain text, which existing clients of this API match on.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_rule_violation() {
            warn!(kind = err.kind(), error = %err, "request rejected");
        } else {
            error!(kind = err.kind(), error = %err, "request failed");
        }
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid bind address {0}")]
    BindAddr(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn rule_violations_map_to_500_plain_text() {
        let res = ApiError(ServiceError::NotFound("Vehicle X doesn't exist".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let ctype = res.headers().get(axum::http::header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(ctype.starts_with("text/plain"));
        assert_eq!(body_text(res).await, "Vehicle X doesn't exist");
    }

    #[tokio::test]
    async fn store_failures_keep_their_prefix() {
        let res = ApiError(ServiceError::Store("pool timed out".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(res).await, "store error: pool timed out");
    }
}
