pub mod api;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AuthConfig, HostConfig};
use crate::executor::ActionExecutor;

#[derive(Clone)]
pub struct HttpState {
    pub executor: Arc<dyn ActionExecutor>,
    pub auth: Arc<AuthConfig>,
}

impl HttpState {
    pub fn new(executor: Arc<dyn ActionExecutor>, auth: AuthConfig) -> Self {
        Self {
            executor,
            auth: Arc::new(auth),
        }
    }
}

/// Full application router with state applied.
pub fn app(state: HttpState) -> Router {
    Router::new()
        .nest("/api", api::router(state.clone()))
        .fallback(api::not_found)
        .with_state(state)
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run(
    config: &HostConfig,
    executor: Arc<dyn ActionExecutor>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener = bind(config.http.bind).await?;
    let state = HttpState::new(executor, config.auth.clone());
    if state.auth.api_key.is_none() {
        tracing::warn!("no API key configured; any non-empty X-API-Key header is accepted");
    }
    serve(listener, app(state), shutdown).await
}

pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))
}

pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("resolve local address")?;
    tracing::info!("HTTP server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .with_context(|| format!("serve {addr}"))?;
    tracing::info!("HTTP server stopped");
    Ok(())
}
