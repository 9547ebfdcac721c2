//! 태스크 목록 endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::{info, warn};

use taskgate_core::{ErrorBody, GatewayError, Identity, Task, IDENTITY_HEADER};

use crate::error::{failure, ApiResult};
use crate::state::TaskState;

/// `x-user-data` 헤더에서 게이트웨이가 주입한 신원을 추출합니다.
///
/// 헤더가 없으면 게이트웨이를 거치지 않은 직접 호출이므로 401,
/// JSON 파싱에 실패하면 400을 반환합니다.
fn extract_identity(headers: &HeaderMap) -> ApiResult<Identity> {
    let raw = headers
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing {} header, rejecting direct access", IDENTITY_HEADER);
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody::new("Unauthorized")),
            )
        })?;

    serde_json::from_str::<Identity>(raw).map_err(|e| {
        warn!(error = %e, "Malformed {} header", IDENTITY_HEADER);
        failure(&GatewayError::MalformedUserHeader)
    })
}

/// 태스크 목록 조회 핸들러.
///
/// GET /tasks
///
/// admin은 전체 태스크를, 그 외 역할은 자신에게 할당된 태스크만
/// 받습니다.
pub async fn list_tasks(
    State(state): State<TaskState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Task>>> {
    let identity = extract_identity(&headers)?;

    let visible: Vec<Task> = state
        .tasks
        .iter()
        .filter(|t| t.visible_to(&identity.subject, identity.role))
        .cloned()
        .collect();

    info!(
        subject = %identity.subject,
        role = %identity.role,
        count = visible.len(),
        "Task list served"
    );

    Ok(Json(visible))
}
