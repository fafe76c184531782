//! Process termination handling.

use tokio::signal;

/// Resolves with the name of the first termination signal delivered to the
/// process: SIGTERM or SIGINT on unix, Ctrl-C elsewhere.
#[cfg(unix)]
pub async fn termination_signal() -> &'static str {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("failed to install SIGTERM handler");

    tokio::select! {
        result = signal::ctrl_c() => {
            result.expect("failed to install SIGINT handler");
            "SIGINT"
        }
        _ = sigterm.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
pub async fn termination_signal() -> &'static str {
    signal::ctrl_c()
        .await
        .expect("failed to install SIGINT handler");
    "SIGINT"
}
