//! 엔트리 및 헬스 체크 endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};

use taskgate_core::ServiceInfo;

/// 서비스 엔트리 엔드포인트.
///
/// GET /
pub async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo::new("user-service", env!("CARGO_PKG_VERSION")))
}

/// 간단한 헬스 체크 (liveness probe용).
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
