//! taskgate 태스크 서비스 서버.
//!
//! 게이트웨이가 주입한 신원에 따라 역할 필터링된 태스크 목록을
//! 제공합니다.

use tracing::{info, warn};

use taskgate_core::{init_logging, ListenConfig, LogConfig};
use taskgate_task_service::{create_task_router, TaskState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging(LogConfig::from_env()).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    info!("Starting task service...");

    let listen = ListenConfig::from_env("TASK_SERVICE", 3300);
    let addr = listen.socket_addr()?;

    let state = TaskState::with_fixture_tasks();
    let app = create_task_router(state);

    info!(%addr, "Task service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Task service stopped gracefully");

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
