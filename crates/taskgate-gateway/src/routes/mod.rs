//! 게이트웨이 라우터 구성.
//!
//! # 라우트 구조
//!
//! - `GET /` - 서비스 이름/버전
//! - `GET /health` - 헬스 체크 (liveness)
//! - 그 외 모든 경로 → 요청 중재 파이프라인 (라우트 테이블 매칭)

mod root;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::observe_response;
use crate::pipeline::gateway_dispatch;
use crate::state::AppState;

pub use root::{health_check, service_info};

/// 게이트웨이 라우터를 구성합니다.
pub fn create_gateway_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .fallback(gateway_dispatch)
        .layer(middleware::from_fn(observe_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
