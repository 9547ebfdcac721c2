//! 토큰 검증 endpoint.
//!
//! 게이트웨이의 내장 서명 검증 대신 사용할 수 있는 외부 검증
//! 엔드포인트입니다. Bearer 토큰을 검증하고 내장된 신원을
//! 반환합니다.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};

use taskgate_auth::decode_token;
use taskgate_core::{GatewayError, Identity};

use crate::error::{failure, ApiResult};
use crate::state::UserState;

/// Bearer 토큰을 검증하고 호출자 신원을 반환합니다.
///
/// GET /me
pub async fn me(State(state): State<UserState>, headers: HeaderMap) -> ApiResult<Json<Identity>> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| failure(&GatewayError::TokenMissing))?;

    let claims = decode_token(token, &state.jwt.secret)
        .map_err(|e| failure(&GatewayError::from(e)))?;

    Ok(Json(claims.identity()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use taskgate_auth::{issue_token, Claims};
    use taskgate_core::{Identity, JwtSettings, Role};

    use crate::routes::create_user_router;
    use crate::state::UserState;

    const TEST_SECRET: &str = "user-service-test-secret-key-minimum-32";

    fn test_app() -> axum::Router {
        let state = UserState::with_mock_users(JwtSettings::new(TEST_SECRET, 7)).unwrap();
        create_user_router(state)
    }

    async fn get_me(app: axum::Router, auth: Option<String>) -> axum::response::Response {
        let mut builder = Request::builder().uri("/me");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_me_returns_embedded_identity() {
        let token = issue_token(&Claims::new("user", Role::User, 7), TEST_SECRET).unwrap();
        let response = get_me(test_app(), Some(format!("Bearer {}", token))).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let identity: Identity = serde_json::from_slice(&body).unwrap();
        assert_eq!(identity.subject, "user");
        assert_eq!(identity.role, Role::User);
    }

    #[tokio::test]
    async fn test_me_without_token_yields_401() {
        let response = get_me(test_app(), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_with_invalid_token_yields_403() {
        let response = get_me(test_app(), Some("Bearer not.a.token".to_string())).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_me_with_expired_token_yields_403() {
        let token = issue_token(&Claims::new("user", Role::User, -1), TEST_SECRET).unwrap();
        let response = get_me(test_app(), Some(format!("Bearer {}", token))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
