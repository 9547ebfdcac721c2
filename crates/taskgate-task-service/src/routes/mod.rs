//! 태스크 서비스 라우트.
//!
//! # 라우트 구조
//!
//! - `GET /` - 서비스 이름/버전
//! - `GET /health` - 헬스 체크
//! - `GET /tasks` - 역할 필터링된 태스크 목록

mod root;
mod tasks;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::TaskState;

pub use root::{health_check, service_info};
pub use tasks::list_tasks;

/// 태스크 서비스 라우터를 구성합니다.
pub fn create_task_router(state: TaskState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/tasks", get(list_tasks))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
