//! 게이트웨이와 백엔드 서비스가 공유하는 도메인 모델.

mod identity;
mod service_info;
mod task;

pub use identity::*;
pub use service_info::*;
pub use task::*;
