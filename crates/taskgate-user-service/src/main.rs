//! taskgate 사용자 서비스 서버.
//!
//! 세션 토큰 발급/검증 엔드포인트를 제공합니다.

use tracing::{info, warn};

use taskgate_core::{init_logging, JwtSettings, ListenConfig, LogConfig};
use taskgate_user_service::{create_user_router, UserState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging(LogConfig::from_env()).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    info!("Starting user service...");

    let jwt = JwtSettings::from_env()?;
    let listen = ListenConfig::from_env("USER_SERVICE", 3200);
    let addr = listen.socket_addr()?;

    let state = UserState::with_mock_users(jwt)?;
    let app = create_user_router(state);

    info!(%addr, "User service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User service stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
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
