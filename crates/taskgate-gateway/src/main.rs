//! taskgate API 게이트웨이 서버.
//!
//! 인증/인가 후 백엔드 서비스로 요청을 전달하는 리버스 프록시를
//! 시작합니다.

use tracing::{info, warn};

use taskgate_core::{init_logging, GatewayConfig, LogConfig};
use taskgate_gateway::{create_gateway_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging(LogConfig::from_env()).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    info!("Starting API gateway...");

    let config = GatewayConfig::from_env()?;
    let addr = config.listen.socket_addr()?;

    info!(
        user_service = %config.upstreams.user_service_url,
        task_service = %config.upstreams.task_service_url,
        admin_service = %config.upstreams.admin_service_url,
        "Upstream origins configured"
    );

    let state = AppState::new(config)?;
    let app = create_gateway_router(state);

    info!(%addr, "API gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
