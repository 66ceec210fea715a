//! Graceful shutdown signal handling.

#[cfg(unix)]
pub async fn wait() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut signal_terminate = signal(SignalKind::terminate()).unwrap();
    tokio::select! {
        _ = signal_terminate.recv() => "SIGTERM",
        _ = tokio::signal::ctrl_c() => "SIGINT",
    }
}

#[cfg(windows)]
pub async fn wait() -> &'static str {
    let _ = tokio::signal::ctrl_c().await;
    "CTRL_C"
}
