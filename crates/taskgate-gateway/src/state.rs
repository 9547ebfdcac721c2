//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 요청 간에 공유되는 것은 불변 설정과 라우트 테이블, 그리고 연결
//! 풀을 가진 HTTP 클라이언트뿐입니다. 가변 공유 상태가 없으므로
//! 요청 수준의 락은 필요하지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use taskgate_core::{GatewayConfig, GatewayError, GatewayResult};

use crate::proxy::RouteTable;

/// 게이트웨이 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 게이트웨이 설정 (시작 시 구성, 이후 불변)
    pub config: Arc<GatewayConfig>,

    /// 라우트 규칙 테이블 (고정 순서, 불변)
    pub routes: Arc<RouteTable>,

    /// 업스트림 전달용 HTTP 클라이언트 (연결 풀 공유)
    pub http: reqwest::Client,
}

impl AppState {
    /// 설정에서 상태를 구성합니다.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `Config` 에러.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| GatewayError::Config(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let routes = Arc::new(RouteTable::standard(&config.upstreams));

        Ok(Self {
            config: Arc::new(config),
            routes,
            http,
        })
    }
}
