// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Serving a router until shutdown
//!
//! The listener runs on its own task while the caller waits for SIGINT,
//! SIGTERM or a programmatic cancellation. Once triggered, the listener stops
//! accepting connections and in-flight requests get until the shutdown
//! deadline to finish.

use std::{
    io,
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use axum::Router;
use axum_server::{Handle, tls_rustls::RustlsConfig};
use tokio::{net::TcpListener, time::timeout};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{
    error::{GraceError, GraceResult},
    signal::wait_for_shutdown,
};

/// Deadline for in-flight requests once shutdown starts
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
enum Listen {
    Http(String),
    Listener(TcpListener),
    Https {
        addr: String,
        cert: PathBuf,
        key: PathBuf,
    },
}

/// A router bound to an address, waiting to be served
///
/// Build one with [`http`](Self::http), [`https`](Self::https) or
/// [`from_listener`](Self::from_listener) and pass it to
/// [`serve_server`]. Keep a clone of
/// [`cancellation_token`](Self::cancellation_token) to stop the server
/// without a signal.
#[derive(Debug)]
pub struct GracefulServer {
    listen: Listen,
    router: Router,
    shutdown_timeout: Duration,
    cancellation_token: CancellationToken,
}

impl GracefulServer {
    fn with_listen(listen: Listen, router: Router) -> Self {
        Self {
            listen,
            router,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Plain HTTP on `addr` (`host:port`, or `:port` for every interface)
    pub fn http(addr: impl Into<String>, router: Router) -> Self {
        Self::with_listen(Listen::Http(addr.into()), router)
    }

    /// HTTPS on `addr` using PEM certificate and key files
    pub fn https(
        addr: impl Into<String>,
        cert: impl AsRef<Path>,
        key: impl AsRef<Path>,
        router: Router,
    ) -> Self {
        Self::with_listen(
            Listen::Https {
                addr: addr.into(),
                cert: cert.as_ref().to_path_buf(),
                key: key.as_ref().to_path_buf(),
            },
            router,
        )
    }

    /// Plain HTTP on a listener that is already bound
    pub fn from_listener(listener: TcpListener, router: Router) -> Self {
        Self::with_listen(Listen::Listener(listener), router)
    }

    /// Change the deadline for in-flight requests
    pub fn with_shutdown_timeout(mut self, shutdown_timeout: Duration) -> Self {
        self.shutdown_timeout = shutdown_timeout;
        self
    }

    /// Deadline for in-flight requests once shutdown starts
    pub fn shutdown_timeout(&self) -> Duration {
        self.shutdown_timeout
    }

    /// Token that stops the server when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Start shutting down without waiting for a signal
    pub fn shutdown(&self) {
        self.cancellation_token.cancel();
    }
}

/// Serve `router` over HTTP on `addr` until a termination signal arrives
pub async fn serve_http(addr: impl Into<String>, router: Router) -> GraceResult<()> {
    serve_server(GracefulServer::http(addr, router)).await
}

/// Serve `router` over HTTPS on `addr` until a termination signal arrives
pub async fn serve_https(
    addr: impl Into<String>,
    cert: impl AsRef<Path>,
    key: impl AsRef<Path>,
    router: Router,
) -> GraceResult<()> {
    serve_server(GracefulServer::https(addr, cert, key, router)).await
}

/// Serve until a signal or cancellation, then wait for in-flight requests
///
/// Failures to bind or to load TLS material are logged and do not end the
/// wait; the function still returns only after shutdown is triggered.
///
/// # Errors
///
/// Returns [`GraceError::ShutdownTimeout`] when requests are still running
/// after the deadline (the listener task is then aborted), or
/// [`GraceError::Task`] if the listener task panicked.
pub async fn serve_server(server: GracefulServer) -> GraceResult<()> {
    let GracefulServer {
        listen,
        router,
        shutdown_timeout,
        cancellation_token,
    } = server;

    let mut task = tokio::spawn(run_listener(listen, router, cancellation_token.clone()));

    wait_for_shutdown(&cancellation_token).await;
    info!(
        timeout_secs = shutdown_timeout.as_secs_f64(),
        "Shutting down server"
    );

    match timeout(shutdown_timeout, &mut task).await {
        Ok(Ok(())) => {
            info!("Server gracefully stopped");
            Ok(())
        }
        Ok(Err(e)) => {
            error!(error = %e, "Server task failed");
            Err(GraceError::Task(e))
        }
        Err(_) => {
            task.abort();
            warn!("Server forced shutdown after deadline");
            Err(GraceError::ShutdownTimeout(shutdown_timeout))
        }
    }
}

async fn run_listener(listen: Listen, router: Router, cancellation_token: CancellationToken) {
    match listen {
        Listen::Http(addr) => match TcpListener::bind(normalize(&addr)).await {
            Ok(listener) => serve_plain(listener, router, cancellation_token).await,
            Err(e) => error!(address = %addr, error = %e, "HTTP server error"),
        },
        Listen::Listener(listener) => serve_plain(listener, router, cancellation_token).await,
        Listen::Https { addr, cert, key } => {
            if let Err(e) = serve_tls(&addr, &cert, &key, router, cancellation_token).await {
                error!(address = %addr, error = %e, "HTTPS server error");
            }
        }
    }
}

async fn serve_plain(listener: TcpListener, router: Router, cancellation_token: CancellationToken) {
    match listener.local_addr() {
        Ok(addr) => info!(address = %addr, "Starting HTTP server"),
        Err(e) => warn!(error = %e, "Starting HTTP server on unknown address"),
    }

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancellation_token.cancelled().await })
        .await;

    if let Err(e) = result {
        error!(error = %e, "HTTP server error");
    }
}

async fn serve_tls(
    addr: &str,
    cert: &Path,
    key: &Path,
    router: Router,
    cancellation_token: CancellationToken,
) -> io::Result<()> {
    let config = RustlsConfig::from_pem_file(cert, key).await?;
    let socket_addr = resolve(addr).await?;

    let handle = Handle::new();
    tokio::spawn({
        let handle = handle.clone();
        async move {
            cancellation_token.cancelled().await;
            handle.graceful_shutdown(None);
        }
    });

    info!(address = %socket_addr, "Starting HTTPS server");
    axum_server::bind_rustls(socket_addr, config)
        .handle(handle)
        .serve(router.into_make_service())
        .await
}

/// Treat a bare `:port` as every interface
fn normalize(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}

async fn resolve(addr: &str) -> io::Result<SocketAddr> {
    tokio::net::lookup_host(normalize(addr))
        .await?
        .next()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{addr} did not resolve"),
            )
        })
}
