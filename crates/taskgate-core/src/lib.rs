//! taskgate 시스템의 핵심 도메인 모델과 공통 인프라.
//!
//! 이 크레이트는 게이트웨이와 백엔드 서비스들이 공유하는 타입을 제공합니다:
//! - [`domain`]: Identity, Role, Task 등 도메인 모델
//! - [`config`]: 환경 변수 기반 설정
//! - [`error`]: 시스템 전반의 에러 분류
//! - [`logging`]: tracing 기반 로깅 초기화

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::{GatewayConfig, JwtSettings, ListenConfig, UpstreamConfig};
pub use domain::{AuthContext, Identity, Role, ServiceInfo, Task, IDENTITY_HEADER};
pub use error::{ErrorBody, GatewayError, GatewayResult};
pub use logging::{init_logging, LogConfig, LogFormat};
