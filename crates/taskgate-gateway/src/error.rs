//! HTTP 에러 응답 매핑.
//!
//! 파이프라인 에러를 고정 형태의 클라이언트 응답으로 변환합니다.
//! 모든 에러 바디는 `{"message": "..."}` 한 가지 모양이며, 내부 상세
//! 정보는 포함되지 않습니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use taskgate_core::{ErrorBody, GatewayError};

/// HTTP 응답으로 변환 가능한 파이프라인 에러 래퍼.
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(ErrorBody::new(self.0.client_message()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_responses_carry_generic_bodies() {
        let cases = [
            (GatewayError::TokenMissing, StatusCode::UNAUTHORIZED),
            (GatewayError::TokenInvalid, StatusCode::FORBIDDEN),
            (GatewayError::TokenExpired, StatusCode::FORBIDDEN),
            (GatewayError::RoleMismatch, StatusCode::FORBIDDEN),
            (
                GatewayError::NoRouteMatch("/api/unknown".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                GatewayError::UpstreamUnavailable("http://10.0.0.5 refused".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                GatewayError::UpstreamTimeout("deadline".into()),
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];

        for (err, expected_status) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected_status);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let parsed: ErrorBody = serde_json::from_slice(&body).unwrap();
            // 내부 주소가 새어나가면 안 됨
            assert!(!parsed.message.contains("10.0.0.5"));
            assert!(!parsed.message.is_empty());
        }
    }
}
