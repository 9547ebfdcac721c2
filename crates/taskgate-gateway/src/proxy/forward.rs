//! 업스트림 요청 전달.
//!
//! 매칭된 라우트 규칙에 따라 요청을 백엔드로 전달하고 응답을
//! 스트리밍으로 되돌려줍니다. 요청/응답 바디 모두 무한 버퍼링 없이
//! 통과시킵니다 (대용량 바디 정합성 요구사항).

use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{header, HeaderName, Response},
};
use tracing::{debug, error};

use taskgate_core::{GatewayError, Identity, IDENTITY_HEADER};

use crate::error::ApiError;
use crate::proxy::RouteRule;
use crate::state::AppState;

/// 홉 단위(hop-by-hop) 헤더인지 확인합니다.
///
/// 이 헤더들은 프록시를 건너 전달되면 안 됩니다 (RFC 7230 §6.1).
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// 요청을 업스트림으로 전달하고 응답을 스트리밍으로 반환합니다.
///
/// - 규칙의 접두사를 제거한 경로로 `target_origin + path`에 전달
/// - 메서드, 쿼리 문자열, 바디 보존
/// - 홉 단위 헤더와 `host`는 전달하지 않음
/// - 인바운드 `x-user-data`는 항상 제거 (위조 방지), 검증된 신원이
///   있고 규칙이 허용할 때만 게이트웨이가 새로 주입
///
/// # Errors
///
/// 타임아웃은 `UpstreamTimeout`(504), 연결 실패는
/// `UpstreamUnavailable`(502)로 변환됩니다. 원시 네트워크 에러는
/// 호출자에게 노출되지 않습니다.
pub async fn forward(
    state: &AppState,
    rule: &RouteRule,
    identity: Option<&Identity>,
    req: Request,
) -> Result<Response<Body>, ApiError> {
    let path = rule.rewrite_path(req.uri().path());
    let target = match req.uri().query() {
        Some(query) => format!("{}{}?{}", rule.target_origin, path, query),
        None => format!("{}{}", rule.target_origin, path),
    };

    debug!(
        prefix = %rule.path_prefix,
        target = %target,
        method = %req.method(),
        "Forwarding request to upstream"
    );

    let (parts, body) = req.into_parts();

    let mut upstream_req = state.http.request(parts.method, &target);

    // 홉 단위 헤더, host, 신원 헤더를 제외한 모든 헤더 전달.
    // content-length는 아웃바운드 바디 기준으로 클라이언트가 다시
    // 계산하므로 복사하지 않습니다.
    for (name, value) in parts.headers.iter() {
        if is_hop_by_hop(name)
            || name == header::HOST
            || name == header::CONTENT_LENGTH
            || name.as_str() == IDENTITY_HEADER
        {
            continue;
        }
        upstream_req = upstream_req.header(name, value);
    }

    // 검증된 신원만 신뢰 헤더로 주입
    if rule.forward_identity {
        if let Some(identity) = identity {
            let payload = serde_json::to_string(identity)
                .map_err(|_| ApiError(GatewayError::MalformedUserHeader))?;
            upstream_req = upstream_req.header(IDENTITY_HEADER, payload);
        }
    }

    // 바디 유무는 프레이밍 헤더가 아니라 바디 스트림 자체로 판정.
    // content-length 없이 스트리밍되는 바디(HTTP/2 업로드)도 전달되어야
    // 하고, 빈 바디(GET 등)에는 chunked 스트림을 붙이지 않습니다.
    if !body.is_end_stream() {
        upstream_req = upstream_req.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }

    let upstream_resp = upstream_req.send().await.map_err(|e| {
        error!(target = %target, error = %e, "Upstream request failed");
        if e.is_timeout() {
            ApiError(GatewayError::UpstreamTimeout(target.clone()))
        } else {
            ApiError(GatewayError::UpstreamUnavailable(e.to_string()))
        }
    })?;

    // 업스트림 응답을 그대로 스트리밍 (상태, 헤더, 바디 불변)
    let mut response = Response::builder().status(upstream_resp.status());
    for (name, value) in upstream_resp.headers() {
        if !is_hop_by_hop(name) {
            response = response.header(name, value);
        }
    }

    response
        .body(Body::from_stream(upstream_resp.bytes_stream()))
        .map_err(|e| {
            error!(error = %e, "Failed to assemble upstream response");
            ApiError(GatewayError::UpstreamUnavailable(e.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_by_hop_detection() {
        assert!(is_hop_by_hop(&HeaderName::from_static("connection")));
        assert!(is_hop_by_hop(&HeaderName::from_static("transfer-encoding")));
        assert!(!is_hop_by_hop(&HeaderName::from_static("content-type")));
        assert!(!is_hop_by_hop(&HeaderName::from_static("authorization")));
    }
}
