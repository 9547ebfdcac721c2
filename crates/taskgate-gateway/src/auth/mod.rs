//! 게이트웨이 인증/인가 단계.
//!
//! - [`middleware`]: Bearer 토큰 추출 및 검증 (Auth Middleware)
//! - [`role`]: 역할 게이트 (Role Gate)

mod middleware;
mod role;

pub use middleware::{authenticate, bearer_token};
pub use role::check_role;
