//! 태스크 도메인 모델.

use serde::{Deserialize, Serialize};

use super::Role;

/// 태스크 엔티티.
///
/// task-service가 반환하는 항목입니다. 와이어 형식은 원래 시스템과
/// 동일하게 camelCase(`assignedTo`)를 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// 태스크 ID
    pub id: u32,
    /// 제목
    pub title: String,
    /// 완료 여부
    pub completed: bool,
    /// 담당 사용자 (subject)
    pub assigned_to: String,
}

impl Task {
    /// 새 태스크 생성.
    pub fn new(id: u32, title: impl Into<String>, assigned_to: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            assigned_to: assigned_to.into(),
        }
    }

    /// 해당 역할/사용자에게 보이는 태스크인지 확인.
    ///
    /// admin은 전체를, 그 외 역할은 자신에게 할당된 태스크만 봅니다.
    pub fn visible_to(&self, subject: &str, role: Role) -> bool {
        role == Role::Admin || self.assigned_to == subject
    }
}
