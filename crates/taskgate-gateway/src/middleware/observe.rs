//! 응답 관찰 middleware.
//!
//! 원래 시스템은 응답 객체의 전송 메서드를 런타임에 덮어써서 나가는
//! 페이로드를 가로챘습니다. 여기서는 그 대신 파이프라인 합성 안의
//! 명시적 middleware 단계로 최종 상태/지연 시간을 관찰합니다.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// 모든 응답의 메서드/경로/상태/지연 시간을 기록합니다.
pub async fn observe_response(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency_ms,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency_ms,
            "Request completed"
        );
    }

    response
}
