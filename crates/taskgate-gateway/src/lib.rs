//! API 게이트웨이.
//!
//! 인바운드 요청을 인증/인가한 뒤 백엔드 서비스로 투명하게 전달하는
//! 리버스 프록시입니다. 요청 중재 파이프라인은 다음 단계로 구성됩니다:
//!
//! 1. 라우트 매칭 (최장 접두사, 첫 매칭 승리)
//! 2. 인증 (라우트 규칙이 요구하는 경우) - Bearer 토큰 검증
//! 3. 역할 게이트 (라우트 규칙이 요구하는 경우) - 정확한 역할 일치
//! 4. 프록시 전달 - 접두사 제거, 신원 헤더 주입, 스트리밍 응답
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: 라우터 구성 및 엔트리 엔드포인트
//! - [`auth`]: Bearer 토큰 인증 및 역할 게이트
//! - [`proxy`]: 라우트 테이블과 업스트림 전달
//! - [`pipeline`]: 요청 중재 파이프라인 (디스패치)
//! - [`middleware`]: 응답 관찰 로깅
//! - [`error`]: HTTP 에러 응답 매핑

pub mod auth;
pub mod error;
pub mod middleware;
pub mod pipeline;
pub mod proxy;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_gateway_router;
pub use state::AppState;
