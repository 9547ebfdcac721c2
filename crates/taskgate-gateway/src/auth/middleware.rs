//! Bearer 토큰 인증 단계.
//!
//! 인바운드 요청의 `Authorization` 헤더에서 Bearer 토큰을 추출하고
//! 토큰 서비스 검증에 위임합니다. 검증은 공유 시크릿에 대한 순수
//! CPU 연산이며 네트워크 대기가 없습니다.
//!
//! 실패 시 파이프라인은 즉시 종료됩니다:
//! - 토큰 없음 → 401
//! - 서명/형식 오류 또는 만료 → 403

use axum::http::{header::AUTHORIZATION, HeaderMap};
use tracing::debug;

use taskgate_auth::decode_token;
use taskgate_core::{GatewayError, Identity, JwtSettings};

use crate::error::ApiError;

/// `Authorization: Bearer <token>` 헤더에서 토큰을 추출합니다.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// 요청을 인증하고 호출자 신원을 반환합니다.
///
/// 반환된 신원은 이 요청의 처리 범위에서만 유효하며, 성공적인 토큰
/// 검증만이 신원을 생산합니다.
///
/// # Errors
///
/// 토큰 부재는 `TokenMissing`(401), 검증 실패는
/// `TokenInvalid`/`TokenExpired`(403).
pub fn authenticate(headers: &HeaderMap, jwt: &JwtSettings) -> Result<Identity, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError(GatewayError::TokenMissing))?;

    let claims = decode_token(token, &jwt.secret).map_err(|e| {
        debug!(error = %e, "Token validation failed");
        ApiError(GatewayError::from(e))
    })?;

    Ok(claims.identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgate_auth::{issue_token, Claims};
    use taskgate_core::Role;

    const TEST_SECRET: &str = "gateway-test-secret-key-minimum-32-chars";

    fn jwt_settings() -> JwtSettings {
        JwtSettings::new(TEST_SECRET, 7)
    }

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        let headers = headers_with_token("abc123");
        assert_eq!(bearer_token(&headers), Some("abc123"));

        // Bearer 접두사 없는 형식은 거부
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_authenticate_valid_token() {
        let token = issue_token(&Claims::new("user", Role::User, 7), TEST_SECRET).unwrap();
        let identity = authenticate(&headers_with_token(&token), &jwt_settings()).unwrap();

        assert_eq!(identity.subject, "user");
        assert_eq!(identity.role, Role::User);
    }

    #[test]
    fn test_authenticate_missing_token() {
        let result = authenticate(&HeaderMap::new(), &jwt_settings());
        assert!(matches!(
            result,
            Err(ApiError(GatewayError::TokenMissing))
        ));
    }

    #[test]
    fn test_authenticate_wrong_secret() {
        let token = issue_token(
            &Claims::new("user", Role::User, 7),
            "a-different-secret-key-minimum-32-chars!",
        )
        .unwrap();

        let result = authenticate(&headers_with_token(&token), &jwt_settings());
        assert!(matches!(
            result,
            Err(ApiError(GatewayError::TokenInvalid))
        ));
    }

    #[test]
    fn test_authenticate_expired_token() {
        let token = issue_token(&Claims::new("user", Role::User, -1), TEST_SECRET).unwrap();

        let result = authenticate(&headers_with_token(&token), &jwt_settings());
        assert!(matches!(
            result,
            Err(ApiError(GatewayError::TokenExpired))
        ));
    }
}
