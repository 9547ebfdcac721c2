//! 로그인 endpoint.
//!
//! 자격증명 검사에 성공하면 7일 만료의 서명된 세션 토큰을
//! 발급합니다. 토큰 발급 외의 부수효과는 없습니다 (세션 상태 저장
//! 없음).

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use taskgate_auth::{issue_token, Claims};
use taskgate_core::GatewayError;

use crate::error::{failure, ApiResult};
use crate::state::UserState;

/// 로그인 요청.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 사용자 식별자
    pub subject: String,
    /// 평문 비밀번호
    pub password: String,
}

/// 로그인 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 발급된 세션 토큰
    pub token: String,
}

/// 자격증명을 검사하고 세션 토큰을 발급합니다.
///
/// POST /login
pub async fn login(
    State(state): State<UserState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let identity = state
        .store
        .authenticate(&req.subject, &req.password)
        .map_err(|e| {
            warn!(subject = %req.subject, "Login rejected");
            failure(&e)
        })?;

    let claims = Claims::new(&identity.subject, identity.role, state.jwt.expiry_days);
    let token = issue_token(&claims, &state.jwt.secret)
        .map_err(|e| failure(&GatewayError::Config(e.to_string())))?;

    info!(subject = %identity.subject, role = %identity.role, "Session token issued");

    Ok(Json(LoginResponse { token }))
}
