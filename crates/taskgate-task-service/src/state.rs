//! 태스크 서비스 공유 상태.

use std::sync::Arc;

use taskgate_core::Task;

/// 모든 핸들러에서 공유되는 상태.
///
/// 태스크 목록은 시작 시 구성되는 정적 데이터입니다 (영속 계층은
/// 범위 밖). 전역 싱글톤 대신 상태로 주입되어 테스트에서 격리
/// 구성이 가능합니다.
#[derive(Clone)]
pub struct TaskState {
    /// 정적 태스크 목록
    pub tasks: Arc<Vec<Task>>,
}

impl TaskState {
    /// 주어진 태스크 목록으로 상태 생성.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(tasks),
        }
    }

    /// 원래 시스템의 고정 태스크 데이터로 상태 생성.
    pub fn with_fixture_tasks() -> Self {
        Self::new(vec![
            Task::new(1, "Admin Task 1", "admin"),
            Task::new(2, "User Task 2", "user"),
        ])
    }
}
