//! 태스크 서비스.
//!
//! 게이트웨이가 주입한 신뢰 헤더(`x-user-data`)의 신원에 따라 역할
//! 필터링된 태스크 목록을 반환합니다.
//!
//! # 신뢰 경계
//!
//! 이 서비스는 `x-user-data` 헤더를 재검증 없이 신뢰합니다. 이
//! 가정은 백엔드 네트워크가 게이트웨이 외부에서 도달 불가능하다는
//! 배포 전제 위에서만 성립합니다. 대안(토큰 서비스 재검증)은 의도적
//! 으로 채택하지 않았습니다 — DESIGN.md 참고.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::create_task_router;
pub use state::TaskState;
