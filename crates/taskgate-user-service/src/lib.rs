//! 사용자 서비스.
//!
//! 세션 토큰 발급(`POST /login`)과 검증(`GET /me`)을 담당하는 토큰
//! 서비스의 HTTP 표면입니다. 세션 상태는 서버에 저장되지 않으며,
//! 발급된 토큰 자체가 유일한 세션입니다.
//!
//! # 모듈 구성
//!
//! - [`state`]: 자격증명 저장소와 JWT 설정을 담은 공유 상태
//! - [`routes`]: 로그인/검증/엔트리 엔드포인트
//! - [`error`]: HTTP 에러 응답 헬퍼

pub mod error;
pub mod routes;
pub mod state;

pub use routes::create_user_router;
pub use state::UserState;
