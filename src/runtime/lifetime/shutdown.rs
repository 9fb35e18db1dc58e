use tokio::signal;
use tracing::warn;

pub async fn listen_for_shutdown() -> std::io::Result<()> {
    // 等待 Ctrl+C 信号
    signal::ctrl_c().await?;
    warn!("Shutdown signal received, initiating graceful shutdown...");
    Ok(())
}
