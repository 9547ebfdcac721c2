//! HTTP 에러 응답 헬퍼.

use axum::{http::StatusCode, Json};

use taskgate_core::{ErrorBody, GatewayError};

/// 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

/// 파이프라인 에러를 고정 형태 응답으로 변환합니다.
pub fn failure(err: &GatewayError) -> (StatusCode, Json<ErrorBody>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorBody::new(err.client_message())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_mapping() {
        let (status, body) = failure(&GatewayError::InvalidCredentials);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, "Invalid username or password");
    }
}
