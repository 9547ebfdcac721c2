//! 사용자 서비스 라우트.
//!
//! # 라우트 구조
//!
//! - `GET /` - 서비스 이름/버전
//! - `GET /health` - 헬스 체크
//! - `POST /login` - 자격증명 검사 후 세션 토큰 발급
//! - `GET /me` - Bearer 토큰 검증 후 신원 반환

mod login;
mod me;
mod root;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::UserState;

pub use login::{login, LoginRequest, LoginResponse};
pub use me::me;
pub use root::{health_check, service_info};

/// 사용자 서비스 라우터를 구성합니다.
pub fn create_user_router(state: UserState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/login", post(login))
        .route("/me", get(me))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
