//! 리버스 프록시 라우터.
//!
//! 경로 접두사를 백엔드 오리진에 매핑하는 라우트 규칙과, 매칭된
//! 규칙에 따라 요청을 전달하는 포워더를 제공합니다.

mod forward;
mod rules;

pub use forward::forward;
pub use rules::{RouteRule, RouteTable};
