//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use insight_core::InsightError;
use serde::Serialize;
use tracing::error;

/// API-layer error type
#[derive(Debug)]
pub struct ApiError(pub InsightError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            InsightError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            InsightError::Upstream(_) => StatusCode::BAD_GATEWAY,
            InsightError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            InsightError::Sentiment(_) | InsightError::Config(_) | InsightError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<InsightError> for ApiError {
    fn from(err: InsightError) -> Self {
        ApiError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (InsightError::sentiment("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (InsightError::timeout("x"), StatusCode::GATEWAY_TIMEOUT),
            (InsightError::upstream("x"), StatusCode::BAD_GATEWAY),
            (InsightError::invalid_input("x"), StatusCode::UNPROCESSABLE_ENTITY),
            (InsightError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
