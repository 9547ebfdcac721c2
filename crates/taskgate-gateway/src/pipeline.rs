//! 요청 중재 파이프라인.
//!
//! 요청별 상태 흐름:
//!
//! ```text
//! Received → (RouteMatched | NoRouteMatch)
//!          → (AuthChecked | AuthSkipped)
//!          → (RoleChecked | RoleSkipped)
//!          → Proxied → Responded
//! ```
//!
//! `NoRouteMatch`는 404로 종료되고, 인증/역할 단계의 실패는 해당
//! 상태 코드로 즉시 종료됩니다 (부분 프록시 없음). 각 요청은 독립적
//! 태스크로 처리되며, 원 호출자가 연결을 끊으면 핸들러 future가
//! 드롭되어 진행 중인 업스트림 호출도 함께 취소됩니다.

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use tracing::debug;

use taskgate_core::{AuthContext, GatewayError};

use crate::auth::{authenticate, check_role};
use crate::error::ApiError;
use crate::proxy::forward;
use crate::state::AppState;

/// 게이트웨이 디스패치 핸들러.
///
/// 엔트리/헬스를 제외한 모든 경로가 이 핸들러를 거칩니다.
pub async fn gateway_dispatch(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().to_string();

    // RouteMatched | NoRouteMatch
    let Some(rule) = state.routes.matching(&path) else {
        debug!(path = %path, "No route rule matched");
        return ApiError(GatewayError::NoRouteMatch(path)).into_response();
    };

    // AuthChecked | AuthSkipped
    let auth_ctx = if rule.requires_auth {
        match authenticate(req.headers(), &state.config.jwt) {
            Ok(identity) => AuthContext::Authenticated(identity),
            Err(err) => return err.into_response(),
        }
    } else {
        AuthContext::Anonymous
    };

    // RoleChecked | RoleSkipped
    if let Some(required) = rule.required_role {
        if let Err(err) = check_role(&auth_ctx, required) {
            return err.into_response();
        }
    }

    // Proxied → Responded
    match forward(&state, rule, auth_ctx.identity(), req).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
