// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shutdown triggers

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Wait for SIGINT/SIGTERM or for the token to be cancelled
///
/// A received signal cancels the token so every task sharing it observes the
/// shutdown.
pub(crate) async fn wait_for_shutdown(cancellation_token: &CancellationToken) {
    tokio::select! {
        signal_name = signal_received() => {
            warn!("Shutdown signal {} received, stopping server", signal_name);
            cancellation_token.cancel();
        },
        () = cancellation_token.cancelled() => {
            info!("Programmatic shutdown requested");
        }
    }
}

/// Resolve with the name of the first termination signal received
///
/// If the handlers cannot be installed the error is logged and the future
/// never resolves, leaving the cancellation token as the only trigger.
async fn signal_received() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                (Err(e), _) | (_, Err(e)) => {
                    error!(error = %e, "Failed to register signal handlers");
                    return std::future::pending().await;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install CTRL+C signal handler");
            return std::future::pending().await;
        }
        "CTRL+C"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn returns_once_token_is_cancelled() {
        let token = CancellationToken::new();
        let waiter = tokio::spawn({
            let token = token.clone();
            async move { wait_for_shutdown(&token).await }
        });

        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn already_cancelled_token_returns_immediately() {
        let token = CancellationToken::new();
        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), wait_for_shutdown(&token))
            .await
            .unwrap();
    }
}
